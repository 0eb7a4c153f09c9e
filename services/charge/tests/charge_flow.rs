//! Charge flow integration: data-layer JSON in, payment display and links out

use fiado_charge::{
    prepare_charge, prepare_payment, ChargeError, ChargeRequest, PaymentDisplay,
};
use fiado_config::FiadoConfig;
use fiado_types::{NoteRecord, StoreProfile};
use pix_codec::{validate_payload, BrCode, ValidationLevel};
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

const REQUEST: &str = r#"{
    "store": {
        "nome_loja": "Mercearia da Ana",
        "pix_chave": "111.444.777-35",
        "pix_tipo": "cpf",
        "pix_nome": null,
        "pix_cidade": "São Paulo"
    },
    "note": {
        "id": "NOTA123",
        "valor": 41.0,
        "descricao": "Pão e leite"
    },
    "customer": {
        "nome": "José da Silva",
        "telefone": "(11) 99876-5432",
        "apelido": "Zé"
    }
}"#;

fn request() -> ChargeRequest {
    serde_json::from_str(REQUEST).unwrap()
}

#[test]
fn test_mercearia_da_ana_charge() {
    let summary = prepare_charge(&request(), &FiadoConfig::default()).unwrap();

    assert_eq!(summary.amount, "R$ 41,00");
    assert_eq!(summary.note_link, "http://localhost:3000/p/NOTA123");
    assert_eq!(
        summary.message,
        "Oi Zé! Passando pra lembrar da continha de R$ 41,00. Dá pra acertar pelo Pix? Obrigado!\n\nhttp://localhost:3000/p/NOTA123"
    );

    let br_code = match &summary.payment {
        PaymentDisplay::Code { br_code, fallback_key, .. } => {
            assert_eq!(fallback_key, "111.444.777-35");
            br_code.clone()
        }
        other => panic!("expected a code, got {other:?}"),
    };
    assert_eq!(
        br_code,
        "00020126330014br.gov.bcb.pix011111144477735520400005303986540541.005802BR\
         5916MERCEARIA DA ANA6009SAO PAULO62110507NOTA123630450E7"
    );
    assert!(validate_payload(&br_code));

    let link = summary.whatsapp_link.unwrap();
    assert!(link.starts_with("https://wa.me/11998765432?text=Oi%20Z%C3%A9%21"));
    assert!(link.ends_with("%0A%0Ahttp%3A%2F%2Flocalhost%3A3000%2Fp%2FNOTA123"));
}

#[test]
fn test_open_amount_note() {
    let mut request = request();
    request.note.amount = dec!(0);

    let summary = prepare_charge(&request, &FiadoConfig::default()).unwrap();
    let code = BrCode::decode(summary.payment.copy_text().unwrap()).unwrap();
    assert!(code.is_open_amount());
    assert_eq!(code.txid(), Some("NOTA123"));
}

#[test]
fn test_invalid_customer_phone() {
    let mut request = request();
    if let Some(customer) = request.customer.as_mut() {
        customer.phone = "123".to_string();
    }

    assert!(matches!(
        prepare_charge(&request, &FiadoConfig::default()),
        Err(ChargeError::InvalidPhone { .. })
    ));
}

#[test]
fn test_store_without_pix() {
    let store: StoreProfile = serde_json::from_str(r#"{"nome_loja": "Bar do Zé"}"#).unwrap();
    let note = NoteRecord {
        id: "n1".to_string(),
        amount: dec!(12),
        description: None,
    };
    assert_eq!(
        prepare_payment(&store, &note, &FiadoConfig::default()),
        PaymentDisplay::NotConfigured
    );
}

#[test]
fn test_configured_links_and_strict_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fiado.toml");
    fs::write(
        &path,
        r#"
[pix]
validation_level = "strict"

[charge]
public_base_url = "https://fiado.app/"
qr_size = 512
whatsapp_base_url = "https://api.whatsapp.com/send"
"#,
    )
    .unwrap();

    let config = FiadoConfig::load_with_env(Some(&path), None, Some(HashMap::new())).unwrap();
    assert_eq!(config.pix.validation_level, ValidationLevel::Strict);

    let summary = prepare_charge(&request(), &config).unwrap();
    assert_eq!(summary.note_link, "https://fiado.app/p/NOTA123");
    match &summary.payment {
        PaymentDisplay::Code { qr_image_url, .. } => {
            assert!(qr_image_url.contains("?size=512x512&data="));
        }
        other => panic!("expected a code, got {other:?}"),
    }
    assert!(summary
        .whatsapp_link
        .unwrap()
        .starts_with("https://api.whatsapp.com/send/11998765432?text="));
}

#[test]
fn test_summary_serializes() {
    let summary = prepare_charge(&request(), &FiadoConfig::default()).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["payment"]["status"], "code");
    assert_eq!(json["amount"], "R$ 41,00");
    assert!(json["payment"]["br_code"].as_str().unwrap().starts_with("000201"));
}
