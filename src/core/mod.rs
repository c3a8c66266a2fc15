//! Generation engine.
//!
//! Data flows strictly forward through three stages:
//!
//! 1. **Catalog** (`catalog`): decoded projects, keys and translations
//! 2. **Build** (`build`): catalog keys become an intermediate module tree
//!    (`model`), with placeholders turned into typed arguments
//! 3. **Render** (`render`): the tree is printed as Rust source
//!
//! The plural rule engine (`plural`) is used by both the builder (coverage
//! checks) and the renderer (the generated `plural_category` method).

pub mod build;
pub mod catalog;
pub mod filter;
pub mod locale;
pub mod model;
pub mod pipeline;
pub mod placeholder;
pub mod placement;
pub mod plural;
pub mod render;

pub use build::{BuildOutput, Builder, build};
pub use catalog::{Catalog, Project, ProjectLanguage, Translation, TranslationKey};
pub use filter::{AcceptAll, ConfigKeyFilter, KeyFilter};
pub use locale::Locale;
pub use model::{
    Argument, ArgumentKind, CategoryBranch, GeneratedFunction, GeneratedModule, LocaleBranch, Text,
};
pub use placement::{Placed, Placement, SeparatorPlacement};
pub use plural::{PluralCategory, category_for};
pub use render::Renderer;
