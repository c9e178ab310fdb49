//! Per-transaction rows returned by the bank drill-down
//! (`/charge/details?bank_num=...`)

use super::flexible;
use super::unescape_slashes;
use serde::{Deserialize, Serialize};

/// QR code payload attached to a charge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    #[serde(rename = "imagemQrcode", default, deserialize_with = "flexible::string")]
    pub image: String,
    #[serde(rename = "qrcode", default, deserialize_with = "flexible::string")]
    pub payload: String,
}

/// Debtor block of the PIX `cob` (charge) object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Debtor {
    #[serde(rename = "nome", default, deserialize_with = "flexible::string")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub cpf: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub cnpj: String,
    #[serde(rename = "cidade", default, deserialize_with = "flexible::string")]
    pub city: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub uf: String,
    #[serde(rename = "logradouro", default, deserialize_with = "flexible::string")]
    pub street: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub cep: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CobValue {
    #[serde(default, deserialize_with = "flexible::string")]
    pub original: String,
}

/// PIX `cob` object as registered with the settlement bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cob {
    #[serde(rename = "devedor", default)]
    pub debtor: Debtor,
    #[serde(rename = "valor", default)]
    pub value: CobValue,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status: String,
    #[serde(rename = "chave", default, deserialize_with = "flexible::string")]
    pub key: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub txid: String,
}

/// One PIX charge as listed for a bank and day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixTransaction {
    #[serde(default, deserialize_with = "flexible::string")]
    pub pix_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub txid: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub wk_instance_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status_filter: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_number: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_name2: String,
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
    pub customer_city: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_state_code: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_street: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_district: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_zipcode: String,

    #[serde(default, deserialize_with = "flexible::amount")]
    pub value: f64,
    #[serde(default, deserialize_with = "flexible::string")]
    pub original_value: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub due_date: String,
    #[serde(rename = "f110_date", default, deserialize_with = "flexible::string")]
    pub date: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub charge_datetime: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub date_time: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_num: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_image_url: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_image_name: String,

    #[serde(default, deserialize_with = "flexible::string")]
    pub pdf_link: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub note: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub multa: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub juros: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub discount_value: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub discount_percentage: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub payment_type: String,

    #[serde(default)]
    pub qr_code: Option<QrCode>,
    #[serde(default)]
    pub cob: Option<Cob>,
}

impl PixTransaction {
    pub fn normalize(&mut self) {
        self.bank_image_url = unescape_slashes(&self.bank_image_url);
        if let Some(qr) = self.qr_code.as_mut() {
            qr.image = unescape_slashes(&qr.image);
        }
    }
}
