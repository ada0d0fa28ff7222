use redb::TableDefinition;

/// Book records: id -> BookRecord (msgpack).
/// Ids are UUIDv7, so key order is creation order.
pub const BOOKS: TableDefinition<&str, &[u8]> = TableDefinition::new("books");
