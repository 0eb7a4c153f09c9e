//! Service configuration defaults
//!
//! Compile-time fallbacks used when neither the config file nor the
//! environment provides a value.

/// Pix payload defaults
pub mod pix {
    /// Merchant name used when the store has neither a Pix name nor a store name
    pub const DEFAULT_MERCHANT_NAME: &str = "LOJISTA";

    /// Merchant city used when the store has no Pix city
    pub const DEFAULT_MERCHANT_CITY: &str = "SAO PAULO";
}

/// Charge flow defaults
pub mod charge {
    /// Public origin of the web app, prefix of `/p/<note id>` links
    pub const PUBLIC_BASE_URL: &str = "http://localhost:3000";

    /// External QR image renderer
    pub const QR_RENDERER_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

    /// Rendered QR image side (pixels)
    pub const QR_SIZE_PX: u32 = 256;

    /// WhatsApp click-to-chat endpoint
    pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

    /// Reminder sent when no custom text is given and the customer is unknown
    pub const DEFAULT_REMINDER: &str =
        "Oi! Passando pra lembrar da continha. Dá pra acertar pelo Pix? Obrigado!";
}

/// Process-wide defaults
pub mod global {
    pub const LOG_LEVEL: &str = "info";

    /// Base configuration file, relative to the working directory
    pub const CONFIG_PATH: &str = "config/fiado.toml";

    /// Environment variable prefix (`FIADO_CHARGE__QR_SIZE=512`)
    pub const ENV_PREFIX: &str = "FIADO";
}
