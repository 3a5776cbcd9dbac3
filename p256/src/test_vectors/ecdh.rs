//! ECDH/secp256r1 test vectors.
//!
//! Two independent key pairs `(a, A)` and `(b, B)` and their shared point `[a]B = [b]A`.

use hex_literal::hex;

/// Private key `a`.
pub const ALICE_PRIVATE_KEY: [u8; 32] = hex!("a170b33839263059f28c105d1fb17c2390c192cfd3ac94af0f21ddb66cad4a27");

/// Public key `A = [a]G`.
pub const ALICE_PUBLIC_KEY: [u8; 64] = hex!(
    "34bd6e33388c49e6c136f6d1c5b98933c7e728e58e8bff31849e444b4efe3ed8"
    "eac33303baf8df855fe2bf68cbefe75015b473282d4eb696485e7cd46732fb62"
);

/// Private key `b`.
pub const BOB_PRIVATE_KEY: [u8; 32] = hex!("0cb1e29c658cda1495e60af593bd04cf0fd630f1f29d0da9953f48f1a09f76b6");

/// Public key `B = [b]G`.
pub const BOB_PUBLIC_KEY: [u8; 64] = hex!(
    "548fba47167aa166d7890814551b77e3cf499a0d963901d5aa0979443ef1223c"
    "7483bba7107e31ec15061d588b76eb55037a027840f29aec9aedeb423707ca64"
);

/// Shared point `x‖y`.
pub const SHARED_SECRET: [u8; 64] = hex!(
    "c3e5e1c7adb92940b912e21febdb027cd0458977d4936bc31b08fb677cf821de"
    "bbb157747eb327ddf25f4678a88a6da7b219423e498c35e9b15e95ededc11af7"
);
