//! Notion API types.

mod block;
mod page;
mod response;
mod rich_text;

pub use block::{
    Block, BlockKind, ChildPageBlock, ExternalFile, FileObject, HostedFile, TableBlock,
    TableRowBlock, TextBlock,
};
pub use page::{Page, Parent, PropertyValue};
pub use response::{ApiErrorBody, BlockList};
pub use rich_text::{Annotations, RichText};
