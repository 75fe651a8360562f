pub mod apply;
pub mod init;
pub mod list;
pub mod new;
pub mod publish;
pub mod show;
pub mod templates;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use list::list;
pub use new::{new_portfolio, NewArgs};
pub use publish::{publish, PublishArgs};
pub use show::{show, ShowArgs};
pub use templates::{templates, TemplatesArgs};
