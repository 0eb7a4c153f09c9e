//! Store profile to Pix merchant mapping

use crate::error::{ChargeError, Result};
use fiado_config::PixConfig;
use fiado_types::{MerchantProfile, PixKeyKind, StoreProfile};
use pix_codec::classify_pix_key;

fn first_filled<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Build the merchant identity a store charges with
///
/// Name falls back from the Pix beneficiary name to the store name to the
/// configured default; city from the Pix city to the configured default.
pub fn merchant_from_store(profile: &StoreProfile, defaults: &PixConfig) -> Result<MerchantProfile> {
    let key = profile
        .configured_key()
        .ok_or(ChargeError::PixNotConfigured)?;

    let name = first_filled(&[
        profile.pix_name.as_deref(),
        Some(profile.store_name.as_str()),
        Some(defaults.default_merchant_name.as_str()),
    ])
    .unwrap_or(defaults.default_merchant_name.as_str());

    let city = first_filled(&[
        profile.pix_city.as_deref(),
        Some(defaults.default_merchant_city.as_str()),
    ])
    .unwrap_or(defaults.default_merchant_city.as_str());

    Ok(MerchantProfile::new(key, name, city))
}

/// Declared and detected key kinds, when the store declared one that the key
/// does not look like
pub fn declared_kind_mismatch(profile: &StoreProfile) -> Option<(PixKeyKind, PixKeyKind)> {
    let declared = profile.pix_kind?;
    let detected = classify_pix_key(profile.configured_key()?).ok()?.kind;
    (declared != detected).then_some((declared, detected))
}
