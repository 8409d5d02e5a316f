//! Employment contract (Perjanjian Kerja) renderer

use shared::format::tanggal;
use shared::models::{Employee, OrgSettings};
use siperjaka_dokumen::DocBuilder;

use super::{or_dots, PAGE_WIDTH};

/// Render the employment contract for one record.
///
/// The signing date comes from the settings singleton and is decomposed into
/// weekday, day-in-words, month name, year-in-words and the numeric form.
pub fn render(employee: &Employee, settings: &OrgSettings) -> String {
    let mut b = DocBuilder::new(PAGE_WIDTH);
    let sign = settings.signature_date;

    // Header
    b.center("PERJANJIAN KERJA");
    b.center(&format!(
        "NOMOR : 810 / {} / TAHUN 2025",
        or_dots(&employee.agreement_number, "............")
    ));
    b.blank();

    let month = match sign {
        Some(d) => tanggal::month_name(d),
        None => tanggal::EMPTY_TEXT,
    };
    b.para(&format!(
        "Pada hari ini, {} tanggal {} bulan {} tahun {} ({}) yang bertanda tangan di bawah ini :",
        tanggal::weekday_name(sign),
        tanggal::day_words(sign),
        month,
        tanggal::year_words(sign),
        tanggal::numeric_form(sign),
    ));
    b.blank();

    // Pihak Kesatu
    b.kv_marked(0, 5, "I.", 25, "Nama", &settings.official_name);
    b.kv_marked(0, 5, "", 25, "Jabatan", &settings.official_position);
    b.para_indent(
        5,
        5,
        "dalam hal ini bertindak untuk dan atas nama Bupati Demak, berdasarkan Surat Keputusan \
         Bupati Demak Nomor 800/ 354 Tahun 2025 tanggal 3 Desember 2025 tentang Penunjukan \
         Pejabat Yang Diberi Kuasa Untuk Penandatanganan Perjanjian Kerja Pegawai Pemerintah \
         Dengan Perjanjian Kerja Paruh Waktu untuk selanjutnya disebut PIHAK KESATU.",
    );
    b.blank();

    // Pihak Kedua
    b.kv_marked(0, 5, "II.", 25, "Nama", &employee.name.to_uppercase());
    b.kv_marked(0, 5, "", 25, "NI PPPK Paruh Waktu", &employee.nip);
    b.kv_marked(0, 5, "", 25, "Unit Kerja", &employee.unit);
    b.para_indent(
        5,
        5,
        "dalam hal ini bertindak dan atas nama diri sendiri, untuk selanjutnya disebut \
         PIHAK KEDUA.",
    );
    b.blank();

    // Pasal 1
    b.center("Pasal 1");
    b.center("MASA PERJANJIAN KERJA, JABATAN, DAN UNIT KERJA");
    b.para(
        "PIHAK KESATU menerima dan mempekerjakan PIHAK KEDUA sebagai Pegawai Pemerintah dengan \
         Perjanjian Kerja Paruh Waktu (PPPK Paruh Waktu) dengan ketentuan sebagai berikut:",
    );
    b.kv_marked(
        5,
        4,
        "a.",
        25,
        "Masa Perjanjian Kerja",
        "1 Oktober 2025 s/d 30 September 2026",
    );
    b.kv_marked(5, 4, "b.", 25, "Jabatan", &employee.position.to_uppercase());
    b.kv_marked(5, 4, "c.", 25, "Masa Kerja sebelumnya", "0 tahun 0 bulan");
    b.kv_marked(5, 4, "d.", 25, "Unit Kerja", &employee.unit.to_uppercase());
    b.blank();

    // Pasal 2
    b.center("Pasal 2");
    b.center("GAJI");
    b.para(&format!(
        "PIHAK KESATU memberikan gaji kepada PIHAK KEDUA sebesar Rp. {},- ({}) setiap bulan \
         sesuai dengan ketentuan peraturan perundang-undangan.",
        or_dots(&employee.salary_amount, "............"),
        or_dots(&employee.salary_text, "......................."),
    ));
    b.blank();

    // Signatures
    b.feed(2);
    let name_upper = employee.name.to_uppercase();
    let nip_line = format!("NI PPPK. {}", employee.nip);
    let position_upper = settings.official_position.to_uppercase();
    let official_upper = settings.official_name.to_uppercase();
    let official_nip_line = format!("NIP. {}", settings.official_nip);
    b.columns(
        &["PIHAK KEDUA", "", "", "", "", "", &name_upper, &nip_line],
        &[
            "PIHAK KESATU",
            &position_upper,
            "",
            "",
            "",
            "",
            &official_upper,
            &official_nip_line,
        ],
    );

    b.build()
}
