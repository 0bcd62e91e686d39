//! WebAssembly module for the Certificate Hub
//!
//! Provides client-side computation for the admin and listing pages:
//! - Bulk recipient parsing
//! - Certificate generation from a template
//! - Template skill editing
//! - Certificate search
//!
//! Values cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Parse `Name,Email,Grade` lines into a JSON array of recipients
#[wasm_bindgen]
pub fn parse_recipients(text: &str) -> Result<String, JsValue> {
    let recipients = parse_recipient_lines(text).map_err(to_js_error)?;
    serde_json::to_string(&recipients).map_err(to_js_error)
}

/// Generate certificates for every recipient line using the JSON template
#[wasm_bindgen]
pub fn generate_certificates(
    template_json: &str,
    recipients_text: &str,
) -> Result<String, JsValue> {
    let template: CertificateTemplate = serde_json::from_str(template_json)
        .map_err(|e| to_js_error(format!("Invalid template JSON: {}", e)))?;
    let recipients = parse_recipient_lines(recipients_text).map_err(to_js_error)?;

    let certificates =
        shared::generate_certificates(&template, &recipients).map_err(to_js_error)?;
    #[cfg(target_arch = "wasm32")]
    log(&format!("Generated {} certificates", certificates.len()));

    serde_json::to_string(&certificates).map_err(to_js_error)
}

/// Add a skill to the JSON template, returning the updated template
#[wasm_bindgen]
pub fn add_template_skill(template_json: &str, skill: &str) -> Result<String, JsValue> {
    let mut template: CertificateTemplate =
        serde_json::from_str(template_json).map_err(to_js_error)?;
    template.add_skill(skill);
    serde_json::to_string(&template).map_err(to_js_error)
}

/// Remove a skill from the JSON template, returning the updated template
#[wasm_bindgen]
pub fn remove_template_skill(template_json: &str, skill: &str) -> Result<String, JsValue> {
    let mut template: CertificateTemplate =
        serde_json::from_str(template_json).map_err(to_js_error)?;
    template.remove_skill(skill);
    serde_json::to_string(&template).map_err(to_js_error)
}

/// Filter a JSON array of certificates by name, course or id
#[wasm_bindgen]
pub fn search_certificates(certificates_json: &str, term: &str) -> Result<String, JsValue> {
    let certificates: Vec<CertificateRecord> =
        serde_json::from_str(certificates_json).map_err(to_js_error)?;
    let found = shared::search_certificates(certificates, term);
    serde_json::to_string(&found).map_err(to_js_error)
}

/// Site-relative page path for a certificate id
#[wasm_bindgen]
pub fn certificate_path(id: &str) -> String {
    shared::certificate_path(id)
}
