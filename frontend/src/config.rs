use log::Level;

pub const BRAND_NAME: &str = "Accident.Ink";
pub const TAGLINE: &str = "Your Injury. Your Case. Your Justice.";

pub const PHONE_DISPLAY: &str = "1-800-LAW-AFFF";
pub const PHONE_HREF: &str = "tel:1-800-LAW-AFFF";

pub const HERO_IMAGE_URL: &str = "https://images.pexels.com/photos/1545743/pexels-photo-1545743.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop";

/// Id of the form section, kept so `#eligibility-form` links still land on it.
pub const FORM_ANCHOR_ID: &str = "eligibility-form";

pub const SUBMIT_ACKNOWLEDGMENT: &str =
    "Thank you! We will contact you within 24 hours to discuss your case.";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "50px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Form payloads and observer events while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
