//! UI layer - element tree and reusable primitives.
//!
//! - **node**: element tree and HTML serialization
//! - **class**: class list composition
//! - **button**, **card**, **form**: presentational primitives
//! - **a11y**: role / label / text queries over a rendered tree
//! - **parse**: reads served HTML back into a tree

pub mod a11y;
pub mod button;
pub mod card;
pub mod class;
pub mod form;
pub mod node;
pub mod parse;

pub use a11y::{ignore_case, QueryError, Screen, TextMatch};
pub use button::{button_variants, Button, ButtonSize, ButtonVariant};
pub use class::cn;
pub use node::{render_document, Element, Node};
pub use parse::{parse, ParseError};
