mod cursor;
mod plain;
