//! Verification sheet (Lembar Verifikasi) renderer

use chrono::NaiveDate;
use shared::format::tanggal;
use shared::models::{Employee, OrgSettings};
use siperjaka_dokumen::DocBuilder;

use super::{or_dots, PAGE_WIDTH};

/// Render the verification sheet for one record.
///
/// Verifier identity is supplied at render time and never stored on the
/// record. The two confirmation lines always render, whatever the input.
pub fn render(
    employee: &Employee,
    settings: &OrgSettings,
    verifier_name: &str,
    verifier_nip: &str,
    verify_date: Option<NaiveDate>,
) -> String {
    let mut b = DocBuilder::new(PAGE_WIDTH);

    // Header
    b.line("PEMERINTAH KABUPATEN DEMAK");
    b.line(&settings.opd_name.to_uppercase());
    b.sep_single();
    b.blank();

    b.center("LEMBAR VERIFIKASI DATA KEPEGAWAIAN");
    b.center("PPPK PARUH WAKTU TAHUN 2025");
    b.blank();

    b.para("Telah dilakukan verifikasi dan validasi terhadap data pegawai tersebut di bawah ini:");
    b.blank();

    // Record data
    b.kv(2, 22, "Nama Lengkap", &employee.name.to_uppercase());
    b.kv(2, 22, "NIP / NI PPPK", &employee.nip);
    b.kv(2, 22, "Jabatan", &employee.position);
    b.kv(2, 22, "Unit Kerja", &employee.unit);
    b.kv(
        2,
        22,
        "Tempat, Tanggal Lahir",
        &format!(
            "{}, {}",
            employee.place_of_birth,
            tanggal::long_form(employee.date_of_birth)
        ),
    );
    b.kv(2, 22, "Pendidikan Terakhir", &employee.education);
    b.kv(2, 22, "Gaji Pokok", &format!("Rp. {}", employee.salary_amount));
    b.blank();

    // Confirmation checklist
    b.line("Catatan Verifikasi:");
    b.line("  [v] Data Pegawai telah sesuai dengan dokumen fisik/digital yang dilampirkan.");
    b.line("  [v] Pegawai telah menyetujui draft Perjanjian Kerja.");
    b.blank();

    // Signatures
    b.feed(1);
    let name_upper = employee.name.to_uppercase();
    let employee_nip_line = format!("NI PPPK. {}", employee.nip);
    let date_line = format!("Demak, {}", tanggal::long_form(verify_date));
    let verifier_upper = or_dots(verifier_name, "..................................").to_uppercase();
    let verifier_nip_line = format!(
        "NIP. {}",
        or_dots(verifier_nip, "..................................")
    );
    b.columns(
        &[
            "Pegawai Pemerintah dengan",
            "Perjanjian Kerja Paruh Waktu,",
            "",
            "",
            "",
            "",
            &name_upper,
            &employee_nip_line,
        ],
        &[
            &date_line,
            "Verifikator Kepegawaian,",
            "",
            "",
            "",
            "",
            &verifier_upper,
            &verifier_nip_line,
        ],
    );

    b.build()
}
