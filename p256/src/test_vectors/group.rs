//! P-256 group test vectors.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 multiples of the generator: `x` and `y` of `k·G` for `k = 1..=10`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
    (
        hex!("b01a172a76a4602c92d3242cb897dde3024c740debb215b4c6b0aae93c2291a9"),
        hex!("e85c10743237dad56fec0e2dfba703791c00f7701c7e16bdfd7c48538fc77fe2"),
    ),
    (
        hex!("8e533b6fa0bf7b4625bb30667c01fb607ef9f8b8a80fef5b300628703187b2a3"),
        hex!("73eb1dbde03318366d069f83a6f5900053c73633cb041b21c55e1a86c1f400b4"),
    ),
    (
        hex!("62d9779dbee9b0534042742d3ab54cadc1d238980fce97dbb4dd9dc1db6fb393"),
        hex!("ad5accbd91e9d8244ff15d771167cee0a2ed51f6bbe76a78da540a6a0f09957e"),
    ),
    (
        hex!("ea68d7b6fedf0b71878938d51d71f8729e0acb8c2c6df8b3d79e8a4b90949ee0"),
        hex!("2a2744c972c9fce787014a964a8ea0c84d714feaa4de823fe85a224a4dd048fa"),
    ),
    (
        hex!("cef66d6b2a3a993e591214d1ea223fb545ca6c471c48306e4c36069404c5723f"),
        hex!("878662a229aaae906e123cdd9d3b4c10590ded29fe751eeeca34bbaa44af0773"),
    ),
];

/// Scalar multiplication with the generator.
///
/// The last vector uses `k = n - 1`, which yields the negated generator.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("d23f0824128b2f330c5c7fd0a6a3a4506513270e269e0d37f2a74de452e6b439"),
        hex!("14b8a2c95626f164e38703bd976b200e0650503e4b701ecbf29f96abf786d31f"),
        hex!("9b978f67b1ea482736e63b98c445745a521135bf468d6d0c168ef66a4163f46f"),
    ),
    (
        hex!("36f675cc81e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f902c"),
        hex!("8dd0cb91f783328c76cbdbdc3106e4435e34cd7635a747f135f4457e8ecf1a6c"),
        hex!("9f417c23844785b2b1e70853e1adf3f4ae42c3e1dd2fdcbe0e23168cfc3578b0"),
    ),
    (
        hex!("8d116ece1738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d9"),
        hex!("77c552ac5c9dfd5f7b358dc2b7386adce7948e099d045f7f551bf78257170e8d"),
        hex!("bca9fbce99cfc1f420283957fedad27ac005001f10516a162b9806330d27256f"),
    ),
    (
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
    ),
];

/// Order of the group, `n`.
pub const ORDER: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// `n - 1`, the largest valid private key.
pub const ORDER_MINUS_ONE: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550");

/// SEC1 compressed encoding of the generator.
pub const COMPRESSED_GENERATOR: [u8; 33] = hex!("036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
