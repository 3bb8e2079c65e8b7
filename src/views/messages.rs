//! User-facing strings shown by the frontend views (Indonesian).

pub const ERR_LOAD_RECIPES: &str = "Gagal memuat resep. Silakan coba lagi nanti.";
pub const ERR_LOAD_INITIAL: &str = "Gagal memuat data awal (kategori atau resep).";
pub const ERR_LOAD_CATEGORY_PAGE: &str = "Gagal memuat kategori atau resep.";
pub const ERR_LOAD_CATEGORY_RECIPES: &str = "Gagal memuat resep untuk kategori ini.";

pub const ERR_LOAD_DETAIL: &str = "Gagal memuat detail resep. Resep mungkin tidak ditemukan.";
pub const ERR_DELETE: &str = "Gagal menghapus resep.";

pub const ERR_LOAD_FORM: &str = "Gagal memuat data resep atau kategori. Silakan coba lagi.";
pub const ERR_EMPTY_STEPS: &str = "Bahan dan langkah-langkah tidak boleh kosong.";
pub const ERR_SAVE: &str = "Terjadi kesalahan saat menyimpan resep.";

pub const HEADING_LATEST: &str = "Resep Terbaru";
pub const ALL_CATEGORIES: &str = "Semua Kategori";
pub const TITLE_CREATE: &str = "Tambah Resep Baru";
pub const TITLE_EDIT: &str = "Edit Resep";

pub fn heading_search(term: &str) -> String {
    format!("Hasil Pencarian untuk \"{term}\"")
}

/// Home page heading for a selected category
pub fn heading_category(name: &str) -> String {
    format!("Resep Kategori: {name}")
}

/// Category page heading; `name` is the category or `ALL_CATEGORIES`
pub fn heading_in_category(name: &str) -> String {
    format!("Resep di {name}")
}
