//! DDL for the item table.

/// Name of the single backing table.
pub const ITEMS_TABLE: &str = "file_system_items";

/// Unique constraint on `path`, as named by PostgreSQL.
pub const PATH_UNIQUE_CONSTRAINT: &str = "file_system_items_path_key";

/// Foreign key from `parent_folder_id` to `id`, as named by PostgreSQL.
pub const PARENT_FOREIGN_KEY: &str = "file_system_items_parent_folder_id_fkey";

pub(crate) const TABLE_EXISTS: &str =
    "SELECT to_regclass('public.file_system_items') IS NOT NULL";

pub(crate) const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS file_system_items ( \
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(), \
    path TEXT NOT NULL UNIQUE, \
    is_folder BOOLEAN NOT NULL, \
    file_key TEXT, \
    parent_folder_id UUID REFERENCES file_system_items(id) ON DELETE CASCADE, \
    name TEXT NOT NULL, \
    created_by TEXT NOT NULL, \
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(), \
    updated_by TEXT NOT NULL, \
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW() \
)";

pub(crate) const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_file_system_items_parent ON file_system_items (parent_folder_id)",
    "CREATE INDEX IF NOT EXISTS idx_file_system_items_path ON file_system_items (path)",
    "CREATE INDEX IF NOT EXISTS idx_file_system_items_file_key ON file_system_items (file_key)",
];

pub(crate) const INSERT_ROOT: &str = "\
INSERT INTO file_system_items (path, is_folder, file_key, parent_folder_id, name, created_by, updated_by) \
SELECT $1, TRUE, NULL, NULL, $2, $3, $3 \
WHERE NOT EXISTS (SELECT 1 FROM file_system_items WHERE parent_folder_id IS NULL)";
