//! P-384 group test vectors.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 multiples of the generator: `x` and `y` of `k·G` for `k = 1..=10`.
pub const ADD_TEST_VECTORS: &[([u8; 48], [u8; 48])] = &[
    (
        hex!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
            "5502f25dbf55296c3a545e3872760ab7"
        ),
        hex!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
            "0a60b1ce1d7e819d7a431d7c90ea0e5f"
        ),
    ),
    (
        hex!(
            "08d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e"
            "4fe0e86ebe0e64f85b96a9c75295df61"
        ),
        hex!(
            "8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab425"
            "5ffd43e94d39e22d61501e700a940e80"
        ),
    ),
    (
        hex!(
            "077a41d4606ffa1464793c7e5fdc7d98cb9d3910202dcd06bea4f240d3566da6"
            "b408bbae5026580d02d7e5c70500c831"
        ),
        hex!(
            "c995f7ca0b0c42837d0bbe9602a9fc998520b41c85115aa5f7684c0edc111eac"
            "c24abd6be4b5d298b65f28600a2f1df1"
        ),
    ),
    (
        hex!(
            "138251cd52ac9298c1c8aad977321deb97e709bd0b4ca0aca55dc8ad51dcfc9d"
            "1589a1597e3a5120e1efd631c63e1835"
        ),
        hex!(
            "cacae29869a62e1631e8a28181ab56616dc45d918abc09f3ab0e63cf792aa4dc"
            "ed7387be37bba569549f1c02b270ed67"
        ),
    ),
    (
        hex!(
            "11de24a2c251c777573cac5ea025e467f208e51dbff98fc54f6661cbe56583b0"
            "37882f4a1ca297e60abcdbc3836d84bc"
        ),
        hex!(
            "8fa696c77440f92d0f5837e90a00e7c5284b447754d5dee88c986533b6901aeb"
            "3177686d0ae8fb33184414abe6c1713a"
        ),
    ),
    (
        hex!(
            "627be1acd064d2b2226fe0d26f2d15d3c33ebcbb7f0f5da51cbd41f262573830"
            "21317d7202ff30e50937f0854e35c5df"
        ),
        hex!(
            "09766a4cb3f8b1c21be6dda6c14f1575b2c95352644f774c99864f6137154416"
            "04c45b8d84e165311733a408d3f0f934"
        ),
    ),
    (
        hex!(
            "283c1d7365ce4788f29f8ebf234edffead6fe997fbea5ffa2d58cc9dfa7b1c50"
            "8b05526f55b9ebb2040f05b48fb6d0e1"
        ),
        hex!(
            "9475c99061e41b88ba52efdb8c1690471a61d867ed799729d9c92cd01dbd2256"
            "30d84ede32a78f9e64664cdac512ef8c"
        ),
    ),
    (
        hex!(
            "1692778ea596e0be75114297a6fa383445bf227fbe58190a900c3c73256f11fb"
            "5a3258d6f403d5ece6e9b269d822c87d"
        ),
        hex!(
            "dcd2365700d4106a835388ba3db8fd0e22554adc6d521cd4bd1c30c2ec0eec19"
            "6bade1e9cdd1708d6f6abfa4022b0ad2"
        ),
    ),
    (
        hex!(
            "8f0a39a4049bcb3ef1bf29b8b025b78f2216f7291e6fd3bac6cb1ee285fb6e21"
            "c388528bfee2b9535c55e4461079118b"
        ),
        hex!(
            "62c77e1438b601d6452c4a5322c3a9799a9b3d7ca3c400c6b7678854aed9b302"
            "9e743efedfd51b68262da4f9ac664af8"
        ),
    ),
    (
        hex!(
            "a669c5563bd67eec678d29d6ef4fde864f372d90b79b9e88931d5c29291238cc"
            "ed8e85ab507bf91aa9cb2d13186658fb"
        ),
        hex!(
            "a988b72ae7c1279f22d9083db5f0ecddf70119550c183c31c502df78c3b705a8"
            "296d8195248288d997784f6ab73a21dd"
        ),
    ),
];

/// Scalar multiplication with the generator.
///
/// The last vector uses `k = n - 1`, which yields the negated generator.
pub const MUL_TEST_VECTORS: &[([u8; 48], [u8; 48], [u8; 48])] = &[
    (
        hex!(
            "9531985d5d9dc9f81818e811892f902bd23f0824128b2f330c5c7fd0a6a3a450"
            "6513270e269e0d37f2a74de452e6b439"
        ),
        hex!(
            "3f13432c6ef482fd1c05b80a77e3e4590c1dcf2750aa1f88e081bbdea90c80cd"
            "09eb1ebe9d515d51df18c92621caaa5d"
        ),
        hex!(
            "8c6dc389a56b30a74bd35f8c3ec70e54690be92d723fc330eb8dc5788055ae7b"
            "12d761ce1e8f8255687b65a2904b2439"
        ),
    ),
    (
        hex!(
            "8d116ece1738f7d93d9c172411e20b8f6b0d549b6f03675a1600a35a099950d8"
            "36f675cc81e74ef5e8e25d940ed90476"
        ),
        hex!(
            "10d1c8550356829a5fcb58336114aa3a1a341190846fc1381720791b8e7558d6"
            "2fcc05348924244f79605c797bfa9656"
        ),
        hex!(
            "2298d5b7eb62ea08018050899b3d121b0b58dde73b13466d974494f6ef9cd940"
            "fe61c2c1e80b79b070c0f749d496293c"
        ),
    ),
    (
        hex!(
            "0fd630f1f29d0da9953f48f1a09f76b5a170b33839263059f28c105d1fb17c23"
            "90c192cfd3ac94af0f21ddb66cad4a27"
        ),
        hex!(
            "aa7dafd75a9a029d2011b03d56549d6740c4f5148e0f9c1550d128eef813acc8"
            "c5da84eb8adcdf8e1fde98722836fbbc"
        ),
        hex!(
            "810e584d8f385dd2b76fad6450622b2a357fd31f9008ce077dee6caeb492451f"
            "8de1a35c52aef818c928180086bbfbf9"
        ),
    ),
    (
        hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
            "581a0db248b0a77aecec196accc52972"
        ),
        hex!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
            "5502f25dbf55296c3a545e3872760ab7"
        ),
        hex!(
            "c9e821b569d9d390a26167406d6d23d6070be242d765eb831625ceec4a0f473e"
            "f59f4e30e2817e6285bce2846f15f1a0"
        ),
    ),
];

/// Order of the group, `n`.
pub const ORDER: [u8; 48] = hex!(
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
    "581a0db248b0a77aecec196accc52973"
);

/// `n - 1`, the largest valid private key.
pub const ORDER_MINUS_ONE: [u8; 48] = hex!(
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
    "581a0db248b0a77aecec196accc52972"
);

/// SEC1 compressed encoding of the generator.
pub const COMPRESSED_GENERATOR: [u8; 49] = hex!(
    "03aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
    "5502f25dbf55296c3a545e3872760ab7"
);
