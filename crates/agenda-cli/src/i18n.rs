//! Static message catalogs. Every user-facing string the app prints comes
//! out of a catalog, keyed by language code; the engine crate never holds
//! display text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One language's worth of prompts, labels, and menu entries.
pub struct Catalog {
    pub code: &'static str,
    messages: &'static [(&'static str, &'static str)],
    pub visitor_menu: &'static [&'static str],
    pub organizer_menu: &'static [&'static str],
    pub table_headers: &'static [&'static str],
    pub filter_columns: &'static [&'static str],
}

impl Catalog {
    /// Look up a message; an unknown key renders a visible placeholder
    /// instead of crashing.
    pub fn msg(&self, key: &str) -> &'static str {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or_else(|| {
                self.messages
                    .iter()
                    .find(|(k, _)| *k == "__missing__")
                    .map(|(_, v)| *v)
                    .unwrap_or("?")
            })
    }

    /// The catalog for a language code, if one is built in.
    pub fn for_lang(code: &str) -> Option<&'static Catalog> {
        CATALOGS.get(code.trim().to_lowercase().as_str()).copied()
    }

    /// English, the fallback for unknown codes in settings files.
    pub fn fallback() -> &'static Catalog {
        &EN
    }
}

static CATALOGS: Lazy<HashMap<&'static str, &'static Catalog>> =
    Lazy::new(|| HashMap::from([("en", &EN), ("id", &ID)]));

static TABLE_HEADERS_EN: &[&str] = &[
    "#", "Name", "When", "Location", "Address", "Organizer", "Category", "Status", "Price",
    "Att", "Avg",
];

static TABLE_HEADERS_ID: &[&str] = &[
    "#", "Nama", "Waktu", "Lokasi", "Alamat", "Penyelenggara", "Kategori", "Status", "HTM",
    "Hadir", "Rata",
];

static EN: Catalog = Catalog {
    code: "en",
    messages: &[
        ("__missing__", "(missing text)"),
        ("menu_title", "Local Cultural Events Manager"),
        ("prompt_register_or_login", "1=Register, 2=Login, 0=Quit: "),
        ("bye", "Bye."),
        ("press_enter", "Press Enter to continue..."),
        ("invalid_choice", "Invalid choice."),
        ("register_header", "Register new user (0 = cancel)"),
        ("login_header", "Login (0 = cancel)"),
        ("prompt_username", "Username: "),
        ("prompt_password", "Password: "),
        ("prompt_password_confirm", "Confirm password: "),
        ("password_mismatch", "Passwords do not match."),
        ("prompt_role_register", "Role (visitor/organizer): "),
        ("invalid_role", "Invalid role. Use 'visitor' or 'organizer'."),
        ("register_success", "Registration success. Please login."),
        ("register_fail_exists", "Username already exists."),
        ("login_success", "Login successful."),
        ("login_fail", "Login failed (username/password incorrect)."),
        ("menu_visitor_title", "Visitor Menu"),
        ("menu_organizer_title", "Organizer Menu"),
        ("menu_exit_item", "0. Quit / Back"),
        ("prompt_choice", "Choose option (number, 0=quit): "),
        ("add_header", "Add Event"),
        ("edit_header", "Edit (enter = keep existing)"),
        ("prompt_name", "Event name: "),
        (
            "prompt_datetime",
            "Event datetime (YYYY-MM-DD HH:MM) - e.g. 2025-11-21 18:00 : ",
        ),
        ("prompt_location", "Location (city/village): "),
        ("prompt_address", "Address (street/district): "),
        ("prompt_organizer", "Organizer: "),
        ("prompt_description", "Short description: "),
        ("prompt_ticket", "Ticket price (number or 'free'): "),
        (
            "prompt_category",
            "Category (Tradition/Festival/Ceremony/Dance/Gamelan/Drama/Music/OTHER): ",
        ),
        (
            "prompt_status_num",
            "Choose status: 1=scheduled, 2=finished, 3=postponed, 4=cancelled : ",
        ),
        ("current_status", "Current status:"),
        ("event_added", "Event successfully added."),
        ("event_updated", "Event successfully updated."),
        ("event_deleted", "Event successfully deleted."),
        ("status_updated", "Event status updated."),
        ("no_events", "No events."),
        (
            "no_selectable",
            "No events to select (past events are hidden by default).",
        ),
        ("list_header", "Events list:"),
        (
            "show_all_hint",
            "Note: default view hides past events (before today). Use the filter menu to see all events.",
        ),
        (
            "prompt_select_row",
            "Enter event number to view details (0=quit): ",
        ),
        ("invalid_input", "Invalid input."),
        ("prompt_time_filter", "Choose period: 1=Day, 2=Week, 3=Month : "),
        (
            "prompt_reference_date",
            "Reference date (YYYY-MM-DD) or empty for today: ",
        ),
        ("prompt_range_start", "Start date (YYYY-MM-DD): "),
        ("prompt_range_end", "End date (YYYY-MM-DD): "),
        ("week_showing", "Showing events from"),
        (
            "invalid_date",
            "Invalid date/datetime format. Use YYYY-MM-DD or YYYY-MM-DD HH:MM.",
        ),
        ("prompt_confirm_delete", "Type 'YES' to confirm deletion: "),
        ("attend_confirmed", "You have been marked as attending this event."),
        (
            "already_attending",
            "You are already marked as attending this event.",
        ),
        (
            "my_attendance_empty",
            "No attendance records found for your username.",
        ),
        ("prompt_review_rating", "Rating (1-5): "),
        ("prompt_review_comment", "Comment (optional): "),
        ("review_added", "Thank you - review saved."),
        (
            "not_allowed_review",
            "You can only review events with status 'finished'.",
        ),
        ("already_reviewed", "You have already reviewed this event."),
        ("invalid_rating", "Invalid rating. Enter 1 to 5."),
        ("prompt_lang", "Choose language (id = Indonesian, en = English): "),
        ("lang_changed", "Language changed to: "),
        (
            "prompt_set_location",
            "Set user location (city/village) or empty to cancel: ",
        ),
        ("settings_saved", "Settings saved."),
        ("stats_title", "Event Statistics:"),
        ("stats_by_category", "Counts by category:"),
        ("stats_by_month", "Counts by month (YYYY-MM):"),
        ("stats_by_city", "Counts by location/city:"),
        ("filter_title", "Filter Menu (0 = cancel)"),
        (
            "filter_columns_hint",
            "Pick columns to filter on (comma-separated). Example: 1,3",
        ),
        ("filter_column_prompt", "Columns: "),
        (
            "filter_datetime_modes",
            "Datetime filter type: 1=exact date (YYYY-MM-DD), 2=range, 3=substring",
        ),
        ("filter_mode_prompt", "Type: "),
        (
            "filter_keyword_prompt",
            "Enter keyword for {} (substring, empty = skip): ",
        ),
        (
            "filter_datetime_keyword_prompt",
            "Keyword for datetime (substring): ",
        ),
        (
            "filter_results_header",
            "Filter results (past events included when they match):",
        ),
        ("detail_title", "Event Detail"),
        ("label_name", "Name"),
        ("label_when", "When"),
        ("label_location", "Location"),
        ("label_address", "Address"),
        ("label_organizer", "Organizer"),
        ("label_category", "Category"),
        ("label_status", "Status"),
        ("label_ticket", "Price"),
        ("label_desc", "Desc"),
        ("detail_attendees", "Attendees:"),
        ("detail_reviews", "Reviews:"),
        ("no_attendees", "  - (no attendees)"),
        ("no_reviews", "  - (no reviews)"),
        ("detail_back", "Press Enter to go back..."),
    ],
    visitor_menu: &[
        "View all events (default hide past events)",
        "View events for a specific day",
        "Filter events (full menu, includes past events)",
        "Filter by time (day/week/month)",
        "Filter by date range (from - to)",
        "Filter full week (Mon - Sun)",
        "Mark attend to an event (uses your username)",
        "View my scheduled attendance (uses your username)",
        "Review an event (only finished, uses your username)",
        "Statistics",
        "Change language",
        "Set user location",
    ],
    organizer_menu: &[
        "Add event (default status = scheduled)",
        "Edit event",
        "Delete event",
        "View all events (default hide past events)",
        "View events for a specific day",
        "Filter events (full menu, includes past events)",
        "Filter by time (day/week/month)",
        "Filter by date range (from - to)",
        "Update event status (use numbers)",
        "Statistics",
        "Change language",
        "Set user location",
    ],
    table_headers: TABLE_HEADERS_EN,
    filter_columns: &[
        "Name",
        "Date/Time",
        "Location",
        "Address",
        "Organizer",
        "Category",
        "Status",
        "Ticket price",
    ],
};

static ID: Catalog = Catalog {
    code: "id",
    messages: &[
        ("__missing__", "(teks tidak tersedia)"),
        ("menu_title", "Manajemen Acara Budaya Lokal"),
        ("prompt_register_or_login", "1=Register, 2=Login, 0=Keluar: "),
        ("bye", "Sampai jumpa."),
        ("press_enter", "Tekan Enter untuk melanjutkan..."),
        ("invalid_choice", "Pilihan tidak valid."),
        ("register_header", "Daftar pengguna baru (0 = batal)"),
        ("login_header", "Login (0 = batal)"),
        ("prompt_username", "Username: "),
        ("prompt_password", "Password: "),
        ("prompt_password_confirm", "Konfirmasi password: "),
        ("password_mismatch", "Password tidak sama."),
        ("prompt_role_register", "Role (visitor/organizer): "),
        ("invalid_role", "Role tidak valid. Gunakan 'visitor' atau 'organizer'."),
        ("register_success", "Registrasi berhasil. Silakan login."),
        ("register_fail_exists", "Username sudah ada."),
        ("login_success", "Login sukses."),
        ("login_fail", "Login gagal (username/password salah)."),
        ("menu_visitor_title", "Menu Pengunjung"),
        ("menu_organizer_title", "Menu Penyelenggara"),
        ("menu_exit_item", "0. Keluar / Kembali"),
        ("prompt_choice", "Pilih opsi (angka, 0=keluar): "),
        ("add_header", "Tambah Acara"),
        ("edit_header", "Edit (enter = pertahankan nilai lama)"),
        ("prompt_name", "Nama acara: "),
        (
            "prompt_datetime",
            "Waktu acara (YYYY-MM-DD HH:MM) - contoh: 2025-11-21 18:00 : ",
        ),
        ("prompt_location", "Lokasi (kota/desa): "),
        ("prompt_address", "Alamat detail (jalan/RT/RW): "),
        ("prompt_organizer", "Penyelenggara: "),
        ("prompt_description", "Deskripsi singkat: "),
        ("prompt_ticket", "Harga tiket (angka atau 'gratis'): "),
        (
            "prompt_category",
            "Kategori (Tradisi/Festival/Upacara Adat/Tari/Gamelan/Drama/Musik/OTHER): ",
        ),
        (
            "prompt_status_num",
            "Pilih status: 1=scheduled, 2=finished, 3=postponed, 4=cancelled : ",
        ),
        ("current_status", "Status saat ini:"),
        ("event_added", "Acara berhasil ditambahkan."),
        ("event_updated", "Acara berhasil diperbarui."),
        ("event_deleted", "Acara berhasil dihapus."),
        ("status_updated", "Status acara diperbarui."),
        ("no_events", "Tidak ada acara."),
        (
            "no_selectable",
            "Tidak ada acara untuk dipilih (acara lampau disembunyikan secara default).",
        ),
        ("list_header", "Daftar acara:"),
        (
            "show_all_hint",
            "Catatan: tampilan default menyembunyikan acara lampau (sebelum hari ini). Gunakan menu filter untuk melihat semua acara.",
        ),
        (
            "prompt_select_row",
            "Masukkan nomor acara untuk melihat detail (0=keluar): ",
        ),
        ("invalid_input", "Input tidak valid."),
        ("prompt_time_filter", "Pilih periode: 1=Hari, 2=Minggu, 3=Bulan : "),
        (
            "prompt_reference_date",
            "Tanggal acuan (YYYY-MM-DD) atau kosong untuk hari ini: ",
        ),
        ("prompt_range_start", "Mulai dari (YYYY-MM-DD): "),
        ("prompt_range_end", "Sampai (YYYY-MM-DD): "),
        ("week_showing", "Menampilkan acara dari"),
        (
            "invalid_date",
            "Format tanggal/waktu tidak valid. Gunakan YYYY-MM-DD atau YYYY-MM-DD HH:MM.",
        ),
        ("prompt_confirm_delete", "Ketik 'YA' untuk mengonfirmasi penghapusan: "),
        ("attend_confirmed", "Anda telah terdaftar hadir pada acara ini."),
        ("already_attending", "Anda sudah terdaftar hadir pada acara ini."),
        (
            "my_attendance_empty",
            "Tidak ada jadwal hadir yang ditemukan untuk username Anda.",
        ),
        ("prompt_review_rating", "Rating (1-5): "),
        ("prompt_review_comment", "Komentar (opsional): "),
        ("review_added", "Terima kasih - review telah disimpan."),
        (
            "not_allowed_review",
            "Review hanya dapat diberikan untuk acara dengan status 'finished'.",
        ),
        ("already_reviewed", "Anda sudah memberi review untuk acara ini."),
        ("invalid_rating", "Rating tidak valid. Gunakan 1 sampai 5."),
        ("prompt_lang", "Pilih bahasa (id = Indonesia, en = English): "),
        ("lang_changed", "Bahasa telah diubah ke: "),
        (
            "prompt_set_location",
            "Masukkan lokasi pengguna (kota/desa) atau kosong untuk batal: ",
        ),
        ("settings_saved", "Pengaturan disimpan."),
        ("stats_title", "Statistik Acara:"),
        ("stats_by_category", "Jumlah menurut kategori:"),
        ("stats_by_month", "Jumlah menurut bulan (YYYY-MM):"),
        ("stats_by_city", "Jumlah menurut lokasi/kota:"),
        ("filter_title", "Menu Filter (0 = batal)"),
        (
            "filter_columns_hint",
            "Pilih kolom untuk difilter (pisahkan dengan koma). Contoh: 1,3",
        ),
        ("filter_column_prompt", "Kolom: "),
        (
            "filter_datetime_modes",
            "Tipe filter datetime: 1=tanggal persis (YYYY-MM-DD), 2=rentang, 3=substring",
        ),
        ("filter_mode_prompt", "Tipe: "),
        (
            "filter_keyword_prompt",
            "Masukkan keyword untuk {} (substring, kosong = lewati): ",
        ),
        (
            "filter_datetime_keyword_prompt",
            "Keyword untuk datetime (substring): ",
        ),
        (
            "filter_results_header",
            "Hasil filter (termasuk acara lampau jika cocok):",
        ),
        ("detail_title", "Detail Acara"),
        ("label_name", "Nama"),
        ("label_when", "Waktu"),
        ("label_location", "Lokasi"),
        ("label_address", "Alamat"),
        ("label_organizer", "Penyelenggara"),
        ("label_category", "Kategori"),
        ("label_status", "Status"),
        ("label_ticket", "HTM"),
        ("label_desc", "Deskripsi"),
        ("detail_attendees", "Peserta:"),
        ("detail_reviews", "Review:"),
        ("no_attendees", "  - (belum ada peserta)"),
        ("no_reviews", "  - (belum ada review)"),
        ("detail_back", "Tekan Enter untuk kembali..."),
    ],
    visitor_menu: &[
        "Lihat semua acara (default sembunyikan acara lampau)",
        "Lihat acara pada hari tertentu",
        "Filter acara (menu lengkap, termasuk acara lampau)",
        "Filter berdasarkan waktu (hari/minggu/bulan)",
        "Filter rentang tanggal (dari - sampai)",
        "Filter minggu penuh (Senin - Minggu)",
        "Pilih hadir pada acara (menggunakan username login)",
        "Lihat jadwal hadir saya (menggunakan username login)",
        "Berikan review untuk acara (hanya acara selesai)",
        "Statistik",
        "Ganti bahasa",
        "Atur lokasi pengguna",
    ],
    organizer_menu: &[
        "Tambah acara (status default = scheduled)",
        "Edit acara",
        "Hapus acara",
        "Lihat semua acara (default sembunyikan acara lampau)",
        "Lihat acara pada hari tertentu",
        "Filter acara (menu lengkap, termasuk acara lampau)",
        "Filter berdasarkan waktu (hari/minggu/bulan)",
        "Filter rentang tanggal (dari - sampai)",
        "Update status acara (pakai angka)",
        "Statistik",
        "Ganti bahasa",
        "Atur lokasi pengguna",
    ],
    table_headers: TABLE_HEADERS_ID,
    filter_columns: &[
        "Nama",
        "Tanggal/Waktu",
        "Lokasi",
        "Alamat",
        "Penyelenggara",
        "Kategori",
        "Status",
        "Harga tiket",
    ],
};
