//! Tag definitions and filter tokens
//!
//! The dashboard's tag filter is driven by a single definition string of
//! `category:value` entries separated by `;`. This module parses that string
//! into the category/value option tree shown in the filter dropdown, and
//! provides the token helpers shared with the row predicate.
//!
//! # Examples
//!
//! ```
//! use adlens::tags::{parse, token};
//!
//! let tree = parse("Concept:UGC;Audio - Type:voiceover").unwrap();
//! assert_eq!(tree[0].label, "Concept");
//! assert_eq!(tree[0].options[0].value, token("Concept", "UGC"));
//! ```

pub mod error;
pub mod parser;
pub mod token;

pub use error::{EntryPart, TagError};
pub use parser::{FilterOption, parse, parse_lenient};
pub use token::{category_of, normalize_token, segments, split_token, token};

/// Tag definitions used when the configuration does not provide its own
pub const DEFAULT_TAG_DEFINITIONS: &str = "Concept:UGC;\
Audio - Type:voiceover;\
Audio - Language:English;\
End card elements - CTA:download it and start crushing those levels!;\
End card elements - Objects:colored bubbles;\
End card elements - Objects:wand;\
End card elements - Objects:rocks;\
End card elements - Objects:boots;\
End card elements - Language:English;\
End card elements - CTA Placement:Middle-Right;\
End card elements - Background Colour:Orange;\
End card elements - Background setting:fantasy;\
End card elements - CTA background colour:Dark Purple";
