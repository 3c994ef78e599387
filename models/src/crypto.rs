use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicKeyType {
    EcdsaSecp256k1,
    EddsaEd25519,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum PublicKey {
    /// 33-byte compressed key, hex encoded.
    #[serde(alias = "EcdsaSecp256k1PublicKey")]
    EcdsaSecp256k1 { key_hex: String },
    /// 32-byte key, hex encoded.
    #[serde(alias = "EddsaEd25519PublicKey")]
    EddsaEd25519 { key_hex: String },
}

impl PublicKey {
    pub fn key_type(&self) -> PublicKeyType {
        match self {
            PublicKey::EcdsaSecp256k1 { .. } => PublicKeyType::EcdsaSecp256k1,
            PublicKey::EddsaEd25519 { .. } => PublicKeyType::EddsaEd25519,
        }
    }

    pub fn key_hex(&self) -> &str {
        match self {
            PublicKey::EcdsaSecp256k1 { key_hex } | PublicKey::EddsaEd25519 { key_hex } => key_hex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum Signature {
    /// 65-byte recoverable signature, hex encoded.
    #[serde(alias = "EcdsaSecp256k1Signature")]
    EcdsaSecp256k1 { signature_hex: String },
    /// 64-byte signature, hex encoded.
    #[serde(alias = "EddsaEd25519Signature")]
    EddsaEd25519 { signature_hex: String },
}

impl Signature {
    pub fn signature_hex(&self) -> &str {
        match self {
            Signature::EcdsaSecp256k1 { signature_hex }
            | Signature::EddsaEd25519 { signature_hex } => signature_hex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcdsaSecp256k1Signature {
    pub signature_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EddsaEd25519PublicKey {
    pub key_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EddsaEd25519Signature {
    pub signature_hex: String,
}

/// Intent signature; secp256k1 keys are recovered from the signature itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key_type")]
pub enum SignatureWithPublicKey {
    #[serde(alias = "EcdsaSecp256k1SignatureWithPublicKey")]
    EcdsaSecp256k1 {
        recoverable_signature: EcdsaSecp256k1Signature,
    },
    #[serde(alias = "EddsaEd25519SignatureWithPublicKey")]
    EddsaEd25519 {
        public_key: EddsaEd25519PublicKey,
        signature: EddsaEd25519Signature,
    },
}
