//! Prompt-driven tag filter picker
//!
//! Walks a [`FilterDropdown`] with plain prompts: pick a category, tick its
//! values, apply. Used by `adlens list --pick` where no dashboard is running.

use super::input::{Result, UserInput};
use crate::filters::FilterDropdown;

const SELECT_ALL: &str = "(select all)";

/// Run the picker until a non-empty selection is applied or the user cancels
///
/// Cancelling the category prompt closes the dropdown and returns `None`
/// with the committed filter untouched. Cancelling or submitting an empty
/// value prompt returns to the category list.
///
/// # Errors
///
/// Returns `InputError` if a prompt fails.
pub fn pick_tag_filter(
    input: &dyn UserInput,
    dropdown: &mut FilterDropdown,
) -> Result<Option<Vec<String>>> {
    dropdown.open();

    loop {
        let categories: Vec<String> = dropdown
            .visible_options()
            .iter()
            .map(|o| o.label.clone())
            .collect();

        let Some(index) = input.prompt_select("Filter by category", &categories, None)? else {
            dropdown.close();
            return Ok(None);
        };

        let category = dropdown
            .visible_options()
            .get(index)
            .map(|o| o.value.clone());
        let Some(category) = category else {
            continue;
        };
        if let Err(e) = dropdown.select_category(&category) {
            tracing::warn!(error = %e, "category pick rejected");
            continue;
        }

        if let Some(tokens) = pick_values(input, dropdown, &category)? {
            return Ok(Some(tokens));
        }
        dropdown.back_to_categories();
    }
}

/// Tick values of the open category and apply; `None` when nothing was applied
fn pick_values(
    input: &dyn UserInput,
    dropdown: &mut FilterDropdown,
    category: &str,
) -> Result<Option<Vec<String>>> {
    let values: Vec<(String, String)> = dropdown
        .visible_options()
        .iter()
        .map(|o| (o.label.clone(), o.value.clone()))
        .collect();

    let mut labels = vec![SELECT_ALL.to_string()];
    labels.extend(values.iter().map(|(label, _)| label.clone()));
    let mut checked = vec![dropdown.all_selected()];
    checked.extend(values.iter().map(|(_, token)| dropdown.is_pending(token)));

    let Some(ticked) = input.prompt_multi_select(category, &labels, &checked)? else {
        return Ok(None);
    };

    if ticked.contains(&0) {
        dropdown.select_all(true);
    } else {
        dropdown.select_all(false);
        // Duplicate options share a token; tick it once
        for (_, token) in ticked.iter().filter_map(|&i| values.get(i.wrapping_sub(1))) {
            if !dropdown.is_pending(token) {
                dropdown.toggle_value(token);
            }
        }
    }

    Ok(dropdown.apply())
}
