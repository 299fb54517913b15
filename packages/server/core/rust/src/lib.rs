/* packages/server/core/rust/src/lib.rs */

pub mod dictionary;
pub mod errors;
pub mod injector;
pub mod locale;
pub mod page;
pub mod routing;

// Re-exports for ergonomic use
pub use dictionary::{Catalog, Dictionary, DictionaryError, DictionarySchema};
pub use errors::SiteError;
pub use locale::{Locale, UnknownLocale};
pub use page::{PageContext, RenderedPage, Section, SectionWarning, render_page};
pub use routing::{RouteDecision, route_request};
