use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Secret;

use super::{generate_metadata, AviCredentials};

pub const CREDENTIALS_SECRET_NAME: &str = "avi-secret";

pub fn generate_credentials_secret(
    management_cluster_name: &str,
    credentials: &AviCredentials,
) -> Secret {
    let mut string_data = BTreeMap::from([
        ("username".to_owned(), credentials.username.to_owned()),
        ("password".to_owned(), credentials.password.to_owned()),
    ]);

    if let Some(ca) = &credentials.certificate_authority_data {
        string_data.insert("certificateAuthorityData".to_owned(), ca.to_owned());
    }

    Secret {
        metadata: generate_metadata(management_cluster_name, CREDENTIALS_SECRET_NAME),
        string_data: Some(string_data),
        type_: Some("Opaque".to_owned()),
        ..Default::default()
    }
}
