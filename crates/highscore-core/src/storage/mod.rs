mod codec;
mod entry;
mod store;

pub use codec::{decode_records, encode_record, header_line};
pub use entry::{ScoreEntry, format_timestamp};
pub use store::ScoreStore;
