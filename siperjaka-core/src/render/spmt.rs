//! Task-commencement statement (SPMT) renderer

use shared::format::tanggal;
use shared::models::{Employee, OrgSettings};
use siperjaka_dokumen::DocBuilder;

use super::{or_dots, PAGE_WIDTH};

/// Left offset of the closing signature block
const SIGN_COL: usize = 52;

/// Render the Surat Pernyataan Melaksanakan Tugas for one record.
///
/// The stated validity window is the fixed literal range of the current
/// appointment period, not derived from the record.
pub fn render(employee: &Employee, settings: &OrgSettings) -> String {
    let mut b = DocBuilder::new(PAGE_WIDTH);

    // Kop surat
    b.center("PEMERINTAH KABUPATEN DEMAK");
    b.center("SEKRETARIAT DAERAH");
    b.center("Jalan Kyai Singkil Nomor 7, Demak, Jawa Tengah 59511");
    b.center("Telepon (0291) 685877, Faksimile (0291) 685625");
    b.center("Laman setda.demakkab.go.id, Pos-el setda@demakkab.go.id");
    b.sep_double();
    b.blank();

    b.center("SURAT PERNYATAAN MELAKSANAKAN TUGAS");
    b.center(&format!(
        "Nomor : 821 / {} / 2025",
        or_dots(&employee.spmt_number, ".........................")
    ));
    b.blank();

    // Issuing official
    b.line("Yang bertanda tangan dibawah ini :");
    b.kv_marked(3, 4, "1.", 28, "Nama", &settings.official_name);
    b.kv_marked(3, 4, "2.", 28, "NIP", &settings.official_nip);
    b.kv_marked(
        3,
        4,
        "3.",
        28,
        "Pangkat / Golongan Ruang",
        or_dots(&settings.official_rank, "....................................."),
    );
    b.kv_marked(3, 4, "4.", 28, "Jabatan", &settings.official_position);
    b.blank();

    // Subject employee
    b.line("Dengan ini menyatakan bahwa :");
    b.kv_marked(3, 4, "1.", 28, "Nama", &employee.name);
    b.kv_marked(3, 4, "2.", 28, "NI PPPK Paruh Waktu", &employee.nip);
    b.kv_marked(3, 4, "3.", 28, "Jabatan", &employee.position);
    b.para_indent(
        3,
        7,
        "4. Surat Pengangkatan sebagai Pegawai Pemerintah dengan Perjanjian Kerja Paruh Waktu \
         (PPPK Paruh Waktu) :",
    );
    b.kv_marked(
        7,
        4,
        "a.",
        26,
        "Pejabat yang mengangkat",
        &settings.sk_official.to_uppercase(),
    );
    b.kv_marked(
        7,
        4,
        "b.",
        26,
        "Nomor",
        or_dots(&employee.sk_number, "....................................."),
    );
    b.kv_marked(7, 4, "c.", 26, "Tanggal", &tanggal::long_form(employee.sk_date));
    b.para_indent(
        7,
        11,
        "d. Tanggal mulai berlakunya pengangkatan sebagai Pegawai Pemerintah dengan Perjanjian \
         Kerja Paruh Waktu : 1 Oktober 2025 sampai dengan 30 September 2026",
    );
    b.blank();

    // Commencement statement
    b.para_indent(
        5,
        0,
        &format!(
            "telah secara nyata melaksanakan tugas sejak tanggal {} pada {} Sekretariat Daerah \
             Kabupaten Demak.",
            tanggal::long_form(employee.spmt_date),
            or_dots(
                &employee.placement_unit,
                ".............................................",
            ),
        ),
    );
    b.para_indent(
        5,
        0,
        "Demikian pernyataan ini dibuat dengan sesungguhnya untuk dapat digunakan sebagaimana \
         mestinya.",
    );
    b.blank();

    // Closing signature block
    b.indented(SIGN_COL + 7, "Ditetapkan di Demak");
    b.indented(SIGN_COL + 7, "Pada Tanggal 31 Desember 2025");
    b.indented(SIGN_COL + 7, "Yang membuat pernyataan,");
    b.indented(SIGN_COL, "a.n. Sekretaris Daerah");
    let specific = specific_position(&settings.official_position);
    if specific.is_empty() {
        b.blank();
    } else {
        b.indented(SIGN_COL + 7, &specific);
    }
    b.feed(4);
    b.indented(SIGN_COL + 7, &settings.official_name);
    b.indented(SIGN_COL + 7, &rank_without_golongan(&settings.official_rank));
    b.indented(SIGN_COL + 7, &format!("NIP {}", settings.official_nip));

    b.build()
}

/// The position line under "a.n. Sekretaris Daerah": the official position
/// stripped of the delegating office itself
fn specific_position(position: &str) -> String {
    position
        .replace("Sekretaris Daerah", "")
        .replace("Sekda", "")
        .trim()
        .to_string()
}

/// Rank without the golongan-ruang parenthetical
fn rank_without_golongan(rank: &str) -> String {
    if rank.is_empty() {
        return "Pembina ............".to_string();
    }
    rank.split('(').next().unwrap_or(rank).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::EmployeeStatus;

    fn test_employee() -> Employee {
        Employee {
            id: "1".to_string(),
            nip: "198501012022011001".to_string(),
            name: "Budi Santoso".to_string(),
            position: "Pranata Komputer Ahli Pertama".to_string(),
            unit: "Sekretariat Daerah".to_string(),
            placement_unit: "Bagian Organisasi".to_string(),
            spmt_number: "001".to_string(),
            sk_number: "810/123/2025".to_string(),
            sk_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            spmt_date: NaiveDate::from_ymd_opt(2026, 1, 2),
            status: EmployeeStatus::Approved,
            ..Default::default()
        }
    }

    fn flat(doc: &str) -> String {
        doc.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_substitution_points() {
        let doc = render(&test_employee(), &OrgSettings::default());

        assert!(doc.contains("SURAT PERNYATAAN MELAKSANAKAN TUGAS"));
        assert!(doc.contains("Nomor : 821 / 001 / 2025"));
        assert!(doc.contains("Pangkat / Golongan Ruang    : Pembina Utama Muda (IV/c)"));
        assert!(doc.contains("NI PPPK Paruh Waktu         : 198501012022011001"));
        assert!(doc.contains("Pejabat yang mengangkat   : BUPATI DEMAK"));
        assert!(doc.contains("Nomor                     : 810/123/2025"));
        assert!(doc.contains("Tanggal                   : 1 September 2025"));
        assert!(flat(&doc).contains(
            "telah secara nyata melaksanakan tugas sejak tanggal 2 Januari 2026 pada \
             Bagian Organisasi Sekretariat Daerah Kabupaten Demak."
        ));
        assert!(doc.contains("Ditetapkan di Demak"));
        assert!(doc.contains("a.n. Sekretaris Daerah"));
        // rank in the signature block loses the golongan parenthetical
        assert!(doc.contains("Pembina Utama Muda\n"));
        assert!(doc.contains("NIP 19700101 199003 1 001"));
    }

    #[test]
    fn test_unset_commencement_date_prints_placeholder() {
        let mut emp = test_employee();
        emp.spmt_date = None;
        let doc = render(&emp, &OrgSettings::default());
        assert!(flat(&doc).contains(&format!(
            "melaksanakan tugas sejak tanggal {} pada",
            tanggal::EMPTY_TEXT
        )));
    }

    #[test]
    fn test_missing_numbers_print_dots() {
        let mut emp = test_employee();
        emp.spmt_number = String::new();
        emp.sk_number = String::new();
        emp.placement_unit = String::new();
        let doc = render(&emp, &OrgSettings::default());

        assert!(doc.contains("Nomor : 821 / ......................... / 2025"));
        assert!(doc.contains("Nomor                     : ....................................."));
        assert!(flat(&doc).contains("pada ............................................. Sekretariat Daerah"));
    }

    #[test]
    fn test_specific_position_strips_delegating_office() {
        assert_eq!(specific_position("Sekretaris Daerah"), "");
        assert_eq!(
            specific_position("Asisten Administrasi Umum Sekretaris Daerah"),
            "Asisten Administrasi Umum"
        );
    }

    #[test]
    fn test_rank_without_golongan() {
        assert_eq!(
            rank_without_golongan("Pembina Utama Muda (IV/c)"),
            "Pembina Utama Muda"
        );
        assert_eq!(rank_without_golongan(""), "Pembina ............");
    }

    #[test]
    fn test_deterministic() {
        let emp = test_employee();
        let settings = OrgSettings::default();
        assert_eq!(render(&emp, &settings), render(&emp, &settings));
    }
}
