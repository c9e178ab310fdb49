//! Single charge detail returned by `/charge/details?pix_id=...`

use super::flexible;
use super::transaction::QrCode;
use super::unescape_slashes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixDetails {
    #[serde(default, deserialize_with = "flexible::string")]
    pub pix_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub txid: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub pix_key: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status_qrcode: String,

    #[serde(default, deserialize_with = "flexible::amount")]
    pub value: f64,
    #[serde(default, deserialize_with = "flexible::string")]
    pub original_value: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub discount_value: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub multa: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub juros: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub payment_type: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub due_date: String,
    #[serde(rename = "f110_date", default, deserialize_with = "flexible::string")]
    pub date: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub date_time: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_number: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_juridic_type: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_cpf: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_cnpj: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_email: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_cellphone: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_street: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_district: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_city: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_state_code: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_zipcode: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_num: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_branch: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_account: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub company_code: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub accounting_doc: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub accounting_doc_year: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub nf_number: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub batch: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub charge_text: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub note: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub send_email: String,

    #[serde(default)]
    pub qr_code: Option<QrCode>,
}

impl PixDetails {
    pub fn normalize(&mut self) {
        if let Some(qr) = self.qr_code.as_mut() {
            qr.image = unescape_slashes(&qr.image);
        }
    }

    /// CPF for individuals, CNPJ for companies, whichever is present
    pub fn customer_document(&self) -> &str {
        if self.customer_cpf.trim().is_empty() {
            &self.customer_cnpj
        } else {
            &self.customer_cpf
        }
    }
}
