//! ECDH/secp521r1 test vectors.
//!
//! Two independent key pairs `(a, A)` and `(b, B)` and their shared point `[a]B = [b]A`.

use hex_literal::hex;

/// Private key `a`.
pub const ALICE_PRIVATE_KEY: [u8; 66] = hex!(
    "01201012f037b64ce4228c38fb2918f135d25f557203301850c5a38fd547923a"
    "736994e3bf911a61dbe22e44158bae97ba94d0eda82f8f6d05584ef8aa389227"
    "6659"
);

/// Public key `A = [a]G`.
pub const ALICE_PUBLIC_KEY: [u8; 132] = hex!(
    "01880f0af4edaff8ce9646a42fe9f53bb55e79b1ff3b82588327725170c882c6"
    "685312b7aab45580cc2fc578ace72e414b73a8f7188619cea0647e44ed4d60b3"
    "591201a48819aeb79fed58201c6267b01165cc6d86d096e63dff1baf9f1790aa"
    "639b3cb30965f839bf1c9ec9f8eae96e7f40758a3c38c3a5168211b3ceba3d2f"
    "9d3e52c2"
);

/// Private key `b`.
pub const BOB_PRIVATE_KEY: [u8; 66] = hex!(
    "01963f98e2774cbd87ad5c90a9587403e430ec66a78795e761d17731af10506b"
    "f2efc6f877186d76b07e881ed162ae2eb1547f15052434b9b5df9e7769b10f42"
    "05b5"
);

/// Public key `B = [b]G`.
pub const BOB_PUBLIC_KEY: [u8; 132] = hex!(
    "01178272b4e945cfec43d3222972f81ad5a9561cf42305b7fa29643929894814"
    "f0a2fff15d5592530777ef0ab7fc3f962d8aaf974764e821a7b38e828e2012d0"
    "a4ea00b275a15696505c6e4215dfecee48c474744edfcf370e988d5c59994c9e"
    "3b146e25e1a6f8f862ed1526b57a8d4a4b36aa315f41493b53666a1e8b06e264"
    "57770d15"
);

/// Shared point `x‖y`.
pub const SHARED_SECRET: [u8; 132] = hex!(
    "00f505eb648ee719f1a2f945af92a8d1d6051a3b6dacdbf407eb50bac3d5a380"
    "3d0eb694e2eb33090b8d03e375ba6f11d906310b5992303c51b2111884abe405"
    "ff7301699d962ddfc668b6d8dff9351f2903d80249918bb2a9f3e5d5f2ba582a"
    "ce97917c39fb85535909e88a5d56f2728c3bae2d45481c7e554bdcecbc64a7cb"
    "a602ea59"
);
