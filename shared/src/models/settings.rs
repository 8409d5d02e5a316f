//! Organization settings model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Organization settings (process-wide singleton)
///
/// Read by every document renderer, mutated only through the admin settings
/// update. Exactly one instance exists; the store keeps it under a fixed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgSettings {
    /// Nama OPD
    pub opd_name: String,
    /// Logo reference; empty means the calling surface shows a default mark
    #[serde(default)]
    pub logo_url: String,
    /// Signing official (Pejabat Penandatangan)
    pub official_name: String,
    pub official_nip: String,
    /// Jabatan, e.g. "Sekretaris Daerah"
    pub official_position: String,
    /// Pangkat/Golongan Ruang, e.g. "Pembina Utama Muda (IV/c)"
    pub official_rank: String,
    /// Official who issues the appointment decree, e.g. "BUPATI DEMAK"
    pub sk_official: String,
    /// Default contract signature date
    pub signature_date: Option<NaiveDate>,
}

impl Default for OrgSettings {
    fn default() -> Self {
        Self {
            opd_name: "Sekretariat Daerah".to_string(),
            logo_url: String::new(),
            official_name: "H. AHMAD SUGIARTO, S.T., M.T.".to_string(),
            official_nip: "19700101 199003 1 001".to_string(),
            official_position: "Sekretaris Daerah".to_string(),
            official_rank: "Pembina Utama Muda (IV/c)".to_string(),
            sk_official: "BUPATI DEMAK".to_string(),
            signature_date: NaiveDate::from_ymd_opt(2025, 1, 2),
        }
    }
}

/// Update settings payload (admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub opd_name: Option<String>,
    pub logo_url: Option<String>,
    pub official_name: Option<String>,
    pub official_nip: Option<String>,
    pub official_position: Option<String>,
    pub official_rank: Option<String>,
    pub sk_official: Option<String>,
    pub signature_date: Option<Option<NaiveDate>>,
}

impl OrgSettings {
    /// Apply an admin update
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(v) = update.opd_name {
            self.opd_name = v;
        }
        if let Some(v) = update.logo_url {
            self.logo_url = v;
        }
        if let Some(v) = update.official_name {
            self.official_name = v;
        }
        if let Some(v) = update.official_nip {
            self.official_nip = v;
        }
        if let Some(v) = update.official_position {
            self.official_position = v;
        }
        if let Some(v) = update.official_rank {
            self.official_rank = v;
        }
        if let Some(v) = update.sk_official {
            self.sk_official = v;
        }
        if let Some(v) = update.signature_date {
            self.signature_date = v;
        }
    }
}
