//! P-521 group test vectors.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 multiples of the generator: `x` and `y` of `k·G` for `k = 1..=10`.
pub const ADD_TEST_VECTORS: &[([u8; 66], [u8; 66])] = &[
    (
        hex!(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
            "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
            "bd66"
        ),
        hex!(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
            "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
            "6650"
        ),
    ),
    (
        hex!(
            "00433c219024277e7e682fcb288148c282747403279b1ccc06352c6e5505d769"
            "be97b3b204da6ef55507aa104a3a35c5af41cf2fa364d60fd967f43e3933ba6d"
            "783d"
        ),
        hex!(
            "00f4bb8cc7f86db26700a7f3eceeeed3f0b5c6b5107c4da97740ab21a29906c4"
            "2dbbb3e377de9f251f6b93937fa99a3248f4eafcbe95edc0f4f71be356d661f4"
            "1b02"
        ),
    ),
    (
        hex!(
            "01a73d352443de29195dd91d6a64b5959479b52a6e5b123d9ab9e5ad7a112d7a"
            "8dd1ad3f164a3a4832051da6bd16b59fe21baeb490862c32ea05a5919d2ede37"
            "ad7d"
        ),
        hex!(
            "013e9b03b97dfa62ddd9979f86c6cab814f2f1557fa82a9d0317d2f8ab1fa355"
            "ceec2e2dd4cf8dc575b02d5aced1dec3c70cf105c9bc93a590425f588ca1ee86"
            "c0e5"
        ),
    ),
    (
        hex!(
            "0035b5df64ae2ac204c354b483487c9070cdc61c891c5ff39afc06c5d55541d3"
            "ceac8659e24afe3d0750e8b88e9f078af066a1d5025b08e5a5e2fbc874128719"
            "02f3"
        ),
        hex!(
            "0082096f84261279d2b673e0178eb0b4abb65521aef6e6e32e1b5ae63fe2f199"
            "07f279f283e54ba385405224f750a95b85eebb7faef04699d1d9e21f47fc346e"
            "4d0d"
        ),
    ),
    (
        hex!(
            "00652bf3c52927a432c73dbc3391c04eb0bf7a596efdb53f0d24cf03dab8f177"
            "ace4383c0c6d5e3014237112feaf137e79a329d7e1e6d8931738d5ab5096ec8f"
            "3078"
        ),
        hex!(
            "015be6ef1bdd6601d6ec8a2b73114a8112911cd8fe8e872e0051edd817c9a034"
            "7087bb6897c9072cf374311540211cf5ff79d1f007257354f7f8173cc3e8deb0"
            "90cb"
        ),
    ),
    (
        hex!(
            "01ee4569d6cdb59219532eff34f94480d195623d30977fd71cf3981506ade4ab"
            "01525fbcca16153f7394e0727a239531be8c2f66e95657f380ae23731bedf792"
            "06b9"
        ),
        hex!(
            "01de0255ad0cc64f586ae2dd270546e3b1112aabbb73da5a808e7240a926201a"
            "8a96cab72d0e56648c9df96c984de274f2203dc7b8b55ca0dade1eaccd7858d4"
            "4f17"
        ),
    ),
    (
        hex!(
            "0056d5d1d99d5b7f6346eeb65fda0b073a0c5f22e0e8f5483228f018d2c2f711"
            "4c5d8c308d0abfc698d8c9a6df30dce3bbc46f953f50fdc2619a01cead882816"
            "ecd4"
        ),
        hex!(
            "003d2d1b7d9baaa2a110d1d8317a39d68478b5c582d02824f0dd71dbd98a26cb"
            "de556bd0f293cdec9e2b9523a34591ce1a5f9e76712a5ddefc7b5c6b8bc90525"
            "251b"
        ),
    ),
    (
        hex!(
            "000822c40fb6301f7262a8348396b010e25bd4e29d8a9b003e0a8b8a3b05f826"
            "298f5bfea5b8579f49f08b598c1bc8d79e1ab56289b5a6f4040586f9ea54aa78"
            "ce68"
        ),
        hex!(
            "016331911d5542fc482048fdab6e78853b9a44f8ede9e2c0715b5083de610677"
            "a8f189e9c0aa5911b4bff0ba0df065c578699f3ba940094713538ad642f11f17"
            "801c"
        ),
    ),
    (
        hex!(
            "01585389e359e1e21826a2f5bf157156d488ed34541b988746992c4ab145b8c6"
            "b6657429e1396134da35f3c556df725a318f4f50babd85cd28661f45627967cb"
            "e207"
        ),
        hex!(
            "002a2e618c9a8aedf39f0b55557a27ae938e3088a654ee1cebb6c825ba263ddb"
            "446e0d69e5756057ac840ff56ecf4abfd87d736c2ae928880f343aa0ea86b9ad"
            "2a4e"
        ),
    ),
    (
        hex!(
            "0190eb8f22bda61f281dfcfe7bb6721ec4cd901d879ac09ac7c34a9246b11ada"
            "8910a2c7c178fcc263299daa4da9842093f37c2e411f1a8e819a87ff09a04f2f"
            "3320"
        ),
        hex!(
            "01eb5d96b8491614ba9dbaeab3b0ca2ba760c2eeb2144251b20ba97fd78a62ef"
            "62d2bf5349d44d9864bb536f6163dc57ebeff3689639739faa172954bc98135e"
            "c759"
        ),
    ),
];

/// Scalar multiplication with the generator.
///
/// The last vector uses `k = n - 1`, which yields the negated generator.
pub const MUL_TEST_VECTORS: &[([u8; 66], [u8; 66], [u8; 66])] = &[
    (
        hex!(
            "001336f675cc81e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f"
            "902bd23f0824128b2f330c5c7fd0a6a3a4506513270e269e0d37f2a74de452e6"
            "b439"
        ),
        hex!(
            "01c29c23dabb7e9a5598c599b5377fc1b583a1afda98290b8672d9e0f225533b"
            "ad681713f88e95360ed32f9e80cb3aa7acd9a6c097d75518d5ecf2bccde1f1d9"
            "3e97"
        ),
        hex!(
            "01ac587790e833aaac17d6811d7369d80e7f7a4de08d981d0bd10d0dd377c7f4"
            "9b7fc9795f4036d10d07e81e370316171730a58eb0b86853d6f7d0cc896fae24"
            "9e50"
        ),
    ),
    (
        hex!(
            "012aa09f76b5a170b33839263059f28c105d1fb17c2390c192cfd3ac94af0f21"
            "ddb66cad4a268d116ece1738f7d93d9c172411e20b8f6b0d549b6f03675a1600"
            "a35b"
        ),
        hex!(
            "0159b3166e95022603697d238a2683a4086c67ff1afa2de189e10ad0d85e6a23"
            "3c98949ebc938c27a51fc93708848fe5dc59446f410b44a28f28e496bcac9405"
            "197d"
        ),
        hex!(
            "0038a07f79cb79dac3a1b9a201bac9e5df9e12ee77cf274ed8a660673eef3e0d"
            "d66576676ce884b7f102407d03cee74d5af42285a9ec1e0506a6e9b151476c8c"
            "8a64"
        ),
    ),
    (
        hex!(
            "003c8a6a63ec24ede6a46b4cb2424a23d5962217beaddbc496cb8e81973e0bec"
            "d7b03898d190f9ebdacc0cb1e29c658cda1495e60af593bd04cf0fd630f1f29d"
            "0daa"
        ),
        hex!(
            "0110287c8d3058fe3d889daf98b75b06968c58587b589bc3a5c43aa5c451cb34"
            "3986037349f9c7a396b988f587e021825cb709a7e431a3ebc49132ae44746d50"
            "8792"
        ),
        hex!(
            "010adf836286a0bd4bcaa68e1e2d917767ce4d129d88f2eb7b18008a92de1796"
            "8c1653f9e1e9497e78f3863eac74e09b528008a2f6ac853591a7b788f317a0ec"
            "00e3"
        ),
    ),
    (
        hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
            "6408"
        ),
        hex!(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
            "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
            "bd66"
        ),
        hex!(
            "00e7c6d6958765c43ffba375a04bd382e426670abbb6a864bb97e85042e8d8c1"
            "99d368118d66a10bd9bf3aaf46fec052f89ecac38f795d8d3dbf77416b89602e"
            "99af"
        ),
    ),
];

/// Order of the group, `n`.
pub const ORDER: [u8; 66] = hex!(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
    "6409"
);

/// `n - 1`, the largest valid private key.
pub const ORDER_MINUS_ONE: [u8; 66] = hex!(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
    "6408"
);

/// SEC1 compressed encoding of the generator.
pub const COMPRESSED_GENERATOR: [u8; 67] = hex!(
    "0200c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3d"
    "baa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"
);
