//! ECDH/secp384r1 test vectors.
//!
//! Two independent key pairs `(a, A)` and `(b, B)` and their shared point `[a]B = [b]A`.

use hex_literal::hex;

/// Private key `a`.
pub const ALICE_PRIVATE_KEY: [u8; 48] = hex!(
    "6b4cb2424a23d5962217beaddbc496cb8e81973e0becd7b03898d190f9ebdacc"
    "0cb1e29c658cda1495e60af593bd04d0"
);

/// Public key `A = [a]G`.
pub const ALICE_PUBLIC_KEY: [u8; 96] = hex!(
    "560f6288bdbcaa266390d93450d7fa81a46a8f889c42b5f4676c94f61b42101f"
    "994ed2363d29a2ac9f0d50b40e429b42c54e44d8c969b3067bab27736e16ac19"
    "d3eb4527010cf58431d4df39d5e54843d7921ef386e93097efb89010a636f1fb"
);

/// Private key `b`.
pub const BOB_PRIVATE_KEY: [u8; 48] = hex!(
    "923a736994e3bf911a61dbe22e44158bae97ba94d0eda82f8f6d05584ef8aa38"
    "922766581e27a1c08a6a63ec24ede6a5"
);

/// Public key `B = [b]G`.
pub const BOB_PUBLIC_KEY: [u8; 96] = hex!(
    "d88f9c1b1fef46a542b20c17bc35248b4334a98fa5fe8f9d87d700f0940858b8"
    "84f193d116e297e6f25940f1fa0a03d3cfac802ecb5b148fd6b8e2d1ecaaae23"
    "baabec49b8a5dadaa9078d08c01b5d6fa2521e288a7ed8a4014daa877e1dd2de"
);

/// Shared point `x‖y`.
pub const SHARED_SECRET: [u8; 96] = hex!(
    "ea894b58065634f6ff17975c68e696a2fcc5bc590d02d8dd5f00e5bc96c95a46"
    "422c6bc637b319ec8f65c41c1c83fe9aa2d779b9b67a49e10fab510e2ae46f53"
    "809c5c75c89f59445e707c069b93c23e4e291f9c861238217fb479a650be3978"
);
