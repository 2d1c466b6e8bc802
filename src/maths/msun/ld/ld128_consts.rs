//! Coefficients and split constants for the binary128 format.
//!
//! Minimax fits were made for a 113-bit significand; split constants carry
//! enough trailing zeros that the products the kernels form with them
//! are exact.

use super::super::gamma::GammaConsts;
use super::{Ld128, LdConsts};

static SIN: [Ld128; 13] = [
    Ld128::from_bits(0xbffc_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ff8_1111_1111_1111_1111_1111_1111_1111),
    Ld128::from_bits(0xbff2_a01a_01a0_1a01_a01a_01a0_1a01_a00d),
    Ld128::from_bits(0x3fec_71de_3a55_6c73_38fa_ac1c_88e4_898d),
    Ld128::from_bits(0xbfe5_ae64_567f_544e_38fe_747e_4739_57fa),
    Ld128::from_bits(0x3fde_6124_613a_86d0_97ca_381b_780c_e364),
    Ld128::from_bits(0xbfd6_ae7f_3e73_3b81_f11c_df10_700e_d59c),
    Ld128::from_bits(0x3fce_952c_7703_0ad4_a399_a6b4_6aef_b52b),
    Ld128::from_bits(0xbfc6_2f49_b468_140b_67cb_8b35_7c38_914b),
    Ld128::from_bits(0x3fbd_71b8_ef6d_a2a6_2414_2af2_ac10_181f),
    Ld128::from_bits(0xbfb4_761b_40ab_220a_a4a9_0b69_6006_1aef),
    Ld128::from_bits(0x3fab_3f3b_c9ab_5caa_e13a_68b8_7e44_459c),
    Ld128::from_bits(0xbfa1_cf5f_e0b1_7dc8_a9e7_4746_ffee_049d),
];

static COS: [Ld128; 13] = [
    Ld128::from_bits(0x3ffa_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0xbff5_6c16_c16c_16c1_6c16_c16c_16c1_6c17),
    Ld128::from_bits(0x3fef_a01a_01a0_1a01_a01a_01a0_1a01_a016),
    Ld128::from_bits(0xbfe9_27e4_fb77_89f5_c72e_f016_d3ea_46da),
    Ld128::from_bits(0x3fe2_1eed_8eff_8d89_7b54_4da9_8688_13b4),
    Ld128::from_bits(0xbfda_9397_4a8c_07c9_d20b_ade4_a8b5_7ee8),
    Ld128::from_bits(0x3fd2_ae7f_3e73_3b81_f11d_2d1a_379e_5faf),
    Ld128::from_bits(0xbfca_6827_863b_97d9_7614_1b40_af24_d7dc),
    Ld128::from_bits(0x3fc1_e542_ba40_2017_99ec_f4d1_97f9_6c84),
    Ld128::from_bits(0xbfb9_0ce3_96db_67ad_dba6_7b88_d1f3_bfce),
    Ld128::from_bits(0x3faf_f2cf_0107_f257_4264_47a2_e32c_3109),
    Ld128::from_bits(0xbfa6_88e7_4a3a_8722_2319_f5bb_f608_4874),
    Ld128::from_bits(0x3f9d_08df_658d_b61e_fed9_8c99_2819_b728),
];

static TAN: [Ld128; 29] = [
    Ld128::from_bits(0x3ffd_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ffc_1111_1111_1111_1111_1111_1111_110e),
    Ld128::from_bits(0x3ffa_ba1b_a1ba_1ba1_ba1b_a1ba_1ba1_d84b),
    Ld128::from_bits(0x3ff9_664f_4882_c10f_9f32_d6bb_a464_09f7),
    Ld128::from_bits(0x3ff8_226e_355e_6c23_c8f5_b51c_7461_5bcd),
    Ld128::from_bits(0x3ff6_d6d3_d0e1_57dd_fb5f_cbc3_90f8_753c),
    Ld128::from_bits(0x3ff5_7da3_6452_b75e_2b6a_3cf7_2895_f99b),
    Ld128::from_bits(0x3ff4_3558_2480_3674_4518_b367_5604_36b5),
    Ld128::from_bits(0x3ff2_f57d_7734_d166_4666_fb6c_0b2a_30af),
    Ld128::from_bits(0x3ff1_967e_18af_cafa_0975_a7f5_9cb4_615c),
    Ld128::from_bits(0x3ff0_497d_8eea_253f_b836_a0e3_61fb_a015),
    Ld128::from_bits(0x3fef_0b13_2d39_a327_8d76_26b4_a69d_d04c),
    Ld128::from_bits(0x3fed_b0f7_2d3f_64ed_a07f_f92d_01aa_96a9),
    Ld128::from_bits(0x3fec_5ef2_da3d_c0ec_fa37_9c86_7004_23f5),
    Ld128::from_bits(0x3feb_1c77_e029_d5b0_1557_ffa6_c8be_743e),
    Ld128::from_bits(0x3fe9_cd29_8ef4_c376_5990_7f82_f07b_1d1e),
    Ld128::from_bits(0x3fe8_75ce_879f_a0ec_fc9a_f313_46ac_c525),
    Ld128::from_bits(0x3fe7_2ef8_da3b_9d83_d268_f08e_a334_ee49),
    Ld128::from_bits(0x3fe5_eb88_a6e8_86fa_c47e_3a30_1ac9_0d59),
    Ld128::from_bits(0x3fe4_8c00_e9af_b45a_5f7f_ebdb_419e_f1a9),
    Ld128::from_bits(0x3fe3_4e14_358f_096b_f5bf_8b9c_b3cf_a91d),
    Ld128::from_bits(0x3fe1_a7a6_e70d_bc1e_5015_ebdb_493d_ae8b),
    Ld128::from_bits(0x3fe1_86fc_6e25_a13f_93f8_2ccc_773f_5496),
    Ld128::from_bits(0xbfe0_5c4c_1947_ad2f_294e_c729_3e33_b652),
    Ld128::from_bits(0x3fe1_4df8_fcb2_dc32_e713_7f0c_e632_6d6b),
    Ld128::from_bits(0xbfe0_f2f8_7a8a_c96a_ed14_5c59_36ad_ead0),
    Ld128::from_bits(0x3fe0_5d1b_c6c5_3738_9c39_3246_85b3_cda2),
    Ld128::from_bits(0xbfdf_141d_a857_d42a_1b9b_d7da_1745_654e),
    Ld128::from_bits(0x3fdd_0b97_73ce_e18e_820a_3d9c_ec65_995f),
];

static EXP_POLY: [Ld128; 10] = [
    Ld128::from_bits(0x3ffe_0000_0000_0000_0000_0000_0000_0000),
    Ld128::from_bits(0x3ffc_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ffa_5555_5555_5555_5555_5555_5553_d6ce),
    Ld128::from_bits(0x3ff8_1111_1111_1111_1111_1111_1110_9b5e),
    Ld128::from_bits(0x3ff5_6c16_c16c_16c1_6c16_c488_1cf1_8db0),
    Ld128::from_bits(0x3ff2_a01a_01a0_1a01_a01a_0389_f66d_9ab2),
    Ld128::from_bits(0x3fef_a01a_01a0_19fd_188f_3baf_27de_7c78),
    Ld128::from_bits(0x3fec_71de_3a55_6c70_6f6a_32d6_fd92_0636),
    Ld128::from_bits(0x3fe9_27e4_fe28_f42e_b207_01a4_ba35_1a39),
    Ld128::from_bits(0x3fe5_ae64_59cf_d709_f175_446c_5156_2687),
];

static EXPM1_POLY: [Ld128; 18] = [
    Ld128::from_bits(0x3ffc_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ffa_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ff8_1111_1111_1111_1111_1111_1111_110c),
    Ld128::from_bits(0x3ff5_6c16_c16c_16c1_6c16_c16c_16c1_6c15),
    Ld128::from_bits(0x3ff2_a01a_01a0_1a01_a01a_01a0_1a06_a2b6),
    Ld128::from_bits(0x3fef_a01a_01a0_1a01_a01a_01a0_1a03_727f),
    Ld128::from_bits(0x3fec_71de_3a55_6c73_38fa_ac1a_b5aa_7211),
    Ld128::from_bits(0x3fe9_27e4_fb77_89f5_c72e_f016_2a04_8563),
    Ld128::from_bits(0x3fe5_ae64_567f_544e_38ff_1f02_c6dc_6057),
    Ld128::from_bits(0x3fe2_1eed_8eff_8d89_7b54_8baa_d996_9d64),
    Ld128::from_bits(0x3fde_6124_613a_86d0_74d5_3db7_aae8_d47a),
    Ld128::from_bits(0x3fda_9397_4a8c_07c9_b89f_743c_0c72_8f1d),
    Ld128::from_bits(0x3fd6_ae7f_3e73_43ed_3f9e_10f3_84fe_570d),
    Ld128::from_bits(0x3fd2_ae7f_3e73_41a1_68e9_b0fc_18cc_97db),
    Ld128::from_bits(0x3fce_952c_75d4_8352_8abd_f156_3cf2_f271),
    Ld128::from_bits(0x3fca_6827_855f_9347_99cc_c415_a80c_ae8f),
    Ld128::from_bits(0x3fc6_2f60_9a81_0648_e8f5_39f1_42d7_3d3d),
    Ld128::from_bits(0x3fc1_e564_08d6_12f8_3b6b_9066_9d1b_a7f8),
];

static EXP_TBL: [[Ld128; 2]; 128] = [
    [Ld128::from_bits(0x3fff_0000_0000_0000_0000_0000_0000_0000), Ld128::from_bits(0x0000_0000_0000_0000_0000_0000_0000_0000)],
    [Ld128::from_bits(0x3fff_0163_da9f_b333_56d8_4a66_ae33_7000), Ld128::from_bits(0xbf98_1902_dffe_09fd_9e4f_a0ed_fdfc_3caa)],
    [Ld128::from_bits(0x3fff_02c9_a3e7_7806_0ee6_f7ca_ca4f_7800), Ld128::from_bits(0x3f98_14de_f49e_b851_655e_2e5c_4dd0_8076)],
    [Ld128::from_bits(0x3fff_0431_5e86_e7f8_4bd7_38f9_a20d_a800), Ld128::from_bits(0xbf98_c0c8_97df_a25a_01fd_284d_d50b_22de)],
    [Ld128::from_bits(0x3fff_059b_0d31_5857_43ae_7c54_8eb6_9000), Ld128::from_bits(0xbf98_adf4_00d6_0e5b_5041_05a2_83da_fd0f)],
    [Ld128::from_bits(0x3fff_0706_b29d_df6d_dc6d_c403_a9d8_7800), Ld128::from_bits(0x3f98_93f6_83e5_c584_9563_af18_8ba9_6357)],
    [Ld128::from_bits(0x3fff_0874_5187_59bc_808c_35f2_5d94_2800), Ld128::from_bits(0xbf91_753e_f934_a5f5_89d9_b17c_bfca_1129)],
    [Ld128::from_bits(0x3fff_09e3_ecac_6f38_3452_1e06_0c58_5000), Ld128::from_bits(0xbf98_4a45_a2e8_fee1_2c67_8c01_9a45_4a1f)],
    [Ld128::from_bits(0x3fff_0b55_86cf_9890_f629_8b92_b718_4000), Ld128::from_bits(0x3f98_54c1_b214_8a04_59e7_5851_515d_42b3)],
    [Ld128::from_bits(0x3fff_0cc9_22b7_247f_7407_b705_b893_e000), Ld128::from_bits(0xbf98_d0ba_a9d4_d8c8_0e88_715e_7013_540b)],
    [Ld128::from_bits(0x3fff_0e3e_c32d_3d1a_2020_742e_4f8a_f800), Ld128::from_bits(0xbf97_5aad_53b4_ca74_eed6_1606_995b_acb2)],
    [Ld128::from_bits(0x3fff_0fb6_6aff_ed31_af23_2091_dd8a_1800), Ld128::from_bits(0xbf98_ecd7_58fa_4ec2_12cb_5adf_faec_b3f1)],
    [Ld128::from_bits(0x3fff_1130_1d01_25b5_0a4e_bbf1_aed9_3000), Ld128::from_bits(0x3f97_8cea_c5cc_47ab_166e_e574_2717_86b1)],
    [Ld128::from_bits(0x3fff_12ab_dc06_c31c_bfb9_2bad_324d_6800), Ld128::from_bits(0x3f96_c5ee_4e17_bef9_dbf2_9d63_9703_075a)],
    [Ld128::from_bits(0x3fff_1429_aaea_92dd_fb34_1019_43b2_5800), Ld128::from_bits(0x3f95_b406_112c_e26f_a9eb_b748_874e_1969)],
    [Ld128::from_bits(0x3fff_15a9_8c8a_58e5_1248_0d57_3dd5_6000), Ld128::from_bits(0x3f97_3bf9_2a2b_618e_e31b_376c_2689_2895)],
    [Ld128::from_bits(0x3fff_172b_83c7_d517_adcd_f7c8_c50e_b000), Ld128::from_bits(0x3f97_4a79_2035_509f_f7d7_5869_3f23_c26c)],
    [Ld128::from_bits(0x3fff_18af_9388_c8de_9bbb_f70b_9a3c_2800), Ld128::from_bits(0xbf98_7d1b_41ff_7e8d_076f_735f_16bd_fbb4)],
    [Ld128::from_bits(0x3fff_1a35_beb6_fcb7_53cb_698f_692d_2000), Ld128::from_bits(0xbf98_be52_c9e7_c6d9_5182_8e72_3d8d_b5ea)],
    [Ld128::from_bits(0x3fff_1bbe_0840_45cd_39ab_1e72_b442_8000), Ld128::from_bits(0xbf97_ca06_534a_81b8_c6ea_ae65_e4bb_745a)],
    [Ld128::from_bits(0x3fff_1d48_7316_8b9a_a780_5b80_2899_1000), Ld128::from_bits(0xbf96_f0ac_e97b_bf23_73d3_261f_5c51_bcc7)],
    [Ld128::from_bits(0x3fff_1ed5_022f_cd91_cb88_19ff_6112_2000), Ld128::from_bits(0xbf98_70d7_d964_9dc5_c59b_2410_cfcc_b25e)],
    [Ld128::from_bits(0x3fff_2063_b886_28cd_63b8_eeb0_2950_9000), Ld128::from_bits(0x3f98_4e87_e243_e90e_15c2_0021_326f_398e)],
    [Ld128::from_bits(0x3fff_21f4_9917_ddc9_6255_2fd2_9294_c000), Ld128::from_bits(0xbf98_25a4_f0ac_edc4_1aaf_118b_ee23_1b0e)],
    [Ld128::from_bits(0x3fff_2387_a6e7_5623_866c_1fad_b1c1_6000), Ld128::from_bits(0xbf98_a536_27e6_bd4c_b7e9_04b0_d90e_dfc3)],
    [Ld128::from_bits(0x3fff_251c_e4fb_2a63_f358_2ab7_de9e_9800), Ld128::from_bits(0xbf98_bf72_b1ba_8118_434b_65a1_cd69_6b0b)],
    [Ld128::from_bits(0x3fff_26b4_565e_27cd_d257_a673_281d_3800), Ld128::from_bits(0x3f98_924e_e727_48c3_6eea_ffa2_7358_3eab)],
    [Ld128::from_bits(0x3fff_284d_fe1f_5638_096c_f15c_f03c_a000), Ld128::from_bits(0x3f96_2cff_b545_ca5a_f902_0de5_c4c5_99f6)],
    [Ld128::from_bits(0x3fff_29e9_df51_fdee_12c2_5d15_f5a2_4800), Ld128::from_bits(0x3f98_51de_5448_5604_6901_ff6c_0503_5fb6)],
    [Ld128::from_bits(0x3fff_2b87_fd0d_ad98_ffdd_ea46_538f_c800), Ld128::from_bits(0x3f98_5c42_217e_e1e5_b6f2_28c8_b2f6_b255)],
    [Ld128::from_bits(0x3fff_2d28_5a6e_4030_b400_91d5_36d0_7800), Ld128::from_bits(0xbf98_63dd_3b1f_1972_60df_f3ac_a765_dd4f)],
    [Ld128::from_bits(0x3fff_2eca_fa93_e2f5_611c_a0f4_5d52_3800), Ld128::from_bits(0x3f94_9d7b_08de_e6d1_29e2_aa67_93bf_edac)],
    [Ld128::from_bits(0x3fff_306f_e0a3_1b71_52de_8d5a_4630_6000), Ld128::from_bits(0xbf98_bd09_09a1_ec65_e4eb_057e_8728_749a)],
    [Ld128::from_bits(0x3fff_3217_0fc4_cd83_1353_9cf1_c300_9000), Ld128::from_bits(0xbf95_e488_7377_d47a_17fe_926f_b507_af71)],
    [Ld128::from_bits(0x3fff_33c0_8b26_416f_f4c9_c861_0d96_6800), Ld128::from_bits(0x3f97_6bf9_5d15_9303_9539_d94d_662a_c1ca)],
    [Ld128::from_bits(0x3fff_356c_55f9_29ff_0c94_6234_7637_3800), Ld128::from_bits(0x3f98_79c6_b6c6_b7ca_8364_dde4_9e5d_f99d)],
    [Ld128::from_bits(0x3fff_371a_7373_aa9c_aa71_4550_2f45_4800), Ld128::from_bits(0xbf95_9e07_07b6_ba50_18e5_9906_f344_b132)],
    [Ld128::from_bits(0x3fff_38ca_e6d0_5d86_585a_9cb0_d9be_d000), Ld128::from_bits(0x3f96_90a7_7a61_404f_2126_3d65_d1e0_aa89)],
    [Ld128::from_bits(0x3fff_3a7d_b34e_59ff_6ea1_bc92_99e0_a000), Ld128::from_bits(0x3f97_d336_163f_e2f8_52ce_eb13_4067_4dfc)],
    [Ld128::from_bits(0x3fff_3c32_dc31_3a8e_4840_01f2_28b5_9000), Ld128::from_bits(0xbf96_9114_3f2a_9339_59ff_c0a2_c06c_2628)],
    [Ld128::from_bits(0x3fff_3dea_64c1_2342_235b_4122_3e13_d800), Ld128::from_bits(0xbf96_1808_ba68_fa8f_b77b_3075_7778_1a20)],
    [Ld128::from_bits(0x3fff_3fa4_504a_c801_ba0b_f701_aa41_8000), Ld128::from_bits(0x3f98_97dc_60e4_6def_f962_4c84_f363_07e3)],
    [Ld128::from_bits(0x3fff_4160_a21f_72e2_9f84_325b_8f3d_b800), Ld128::from_bits(0xbf97_e04c_ad0f_abf1_945f_a9cb_bec1_9811)],
    [Ld128::from_bits(0x3fff_431f_5d95_0a89_6dc7_0443_9410_d000), Ld128::from_bits(0xbf98_89bf_0eda_79a8_0453_f085_f6c0_4737)],
    [Ld128::from_bits(0x3fff_44e0_8606_1892_d031_36f4_09df_0000), Ld128::from_bits(0x3f97_9fbd_4f3b_4870_9b78_591d_5cb4_f4f3)],
    [Ld128::from_bits(0x3fff_46a4_1ed1_d005_7725_12f4_5922_a000), Ld128::from_bits(0xbf98_3410_5fd8_06f0_631f_2535_962c_1947)],
    [Ld128::from_bits(0x3fff_486a_2b5c_13cd_013c_1a3b_6906_3000), Ld128::from_bits(0xbf96_f878_4514_62f1_5010_fe32_26ce_36fa)],
    [Ld128::from_bits(0x3fff_4a32_af0d_7d3d_e672_d8bc_f46f_9800), Ld128::from_bits(0xbf98_3cdc_f127_13c3_a717_5ba1_619a_3084)],
    [Ld128::from_bits(0x3fff_4bfd_ad53_62a2_71d4_397a_fec4_3000), Ld128::from_bits(0xbf97_df1f_c9c4_5d1e_a63a_8607_d1b4_ec6d)],
    [Ld128::from_bits(0x3fff_4dcb_299f_ddd0_d63b_36ef_1a9e_1000), Ld128::from_bits(0xbf98_9dbd_a6d2_d54c_97a1_5053_a96e_53d4)],
    [Ld128::from_bits(0x3fff_4f9b_2769_d2ca_6ad3_3d8b_69aa_0800), Ld128::from_bits(0xbf96_8235_43fa_f6d0_b9ac_b199_848b_3db2)],
    [Ld128::from_bits(0x3fff_516d_aa2c_f664_1c11_2f52_c84d_8000), Ld128::from_bits(0x3f98_10c8_738c_1130_bbeb_b046_9001_c44e)],
    [Ld128::from_bits(0x3fff_5342_b569_d4f8_1df0_a83c_49d8_6800), Ld128::from_bits(0x3f98_31fa_7339_51f2_14c0_2d82_4a32_5c9e)],
    [Ld128::from_bits(0x3fff_551a_4ca5_d920_ec52_ec62_0243_5000), Ld128::from_bits(0xbf98_acc6_cdd1_1c9f_6d94_cf32_bc54_6359)],
    [Ld128::from_bits(0x3fff_56f4_736b_527d_a66e_cb00_4764_e800), Ld128::from_bits(0x3f98_9e00_797a_d59e_c00e_be63_9396_7358)],
    [Ld128::from_bits(0x3fff_58d1_2d49_7c7f_d252_bc2b_7343_c000), Ld128::from_bits(0xbf98_8689_b64a_b479_319e_cc87_fc68_55f7)],
    [Ld128::from_bits(0x3fff_5ab0_7dd4_8542_958c_9301_5191_e800), Ld128::from_bits(0x3f98_9a2e_c46b_e409_4070_34fd_edb1_65f1)],
    [Ld128::from_bits(0x3fff_5c92_68a5_946b_701c_4b1b_8169_8800), Ld128::from_bits(0xbf97_5dfc_27b1_95b5_6d0e_8618_e777_7595)],
    [Ld128::from_bits(0x3fff_5e76_f15a_d214_86e9_be4c_2039_9800), Ld128::from_bits(0xbf96_32bf_356e_bf4f_ac2f_5884_9a95_ce31)],
    [Ld128::from_bits(0x3fff_605e_1b97_6dc0_8b07_6f59_2a48_7000), Ld128::from_bits(0xbf97_c4cb_152e_4b89_6207_9846_3763_30d5)],
    [Ld128::from_bits(0x3fff_6247_eb03_a558_4b1f_0fa0_6fd2_d800), Ld128::from_bits(0x3f98_215d_8e75_7cfb_9913_adc5_7797_ced9)],
    [Ld128::from_bits(0x3fff_6434_634c_cc31_fc76_f871_4c4e_d800), Ld128::from_bits(0x3f97_a4e4_1000_3071_03a1_8cf7_a6e0_7b2d)],
    [Ld128::from_bits(0x3fff_6623_8825_5222_4912_7d9e_29b8_f000), Ld128::from_bits(0x3f98_8a51_9bfa_6e05_1d6f_8bc3_ffba_1e55)],
    [Ld128::from_bits(0x3fff_6815_5d44_ca97_3081_c572_27b9_f000), Ld128::from_bits(0x3f98_9383_5ff2_7313_ec04_d42e_e633_1e44)],
    [Ld128::from_bits(0x3fff_6a09_e667_f3bc_c908_b2fb_1366_e800), Ld128::from_bits(0x3f98_4abe_9f1d_6f60_ba89_3ba8_4ced_17ad)],
    [Ld128::from_bits(0x3fff_6c01_2750_bdab_eed7_6a99_800f_5000), Ld128::from_bits(0xbf96_9804_28e9_e264_f9dd_f215_0986_031f)],
    [Ld128::from_bits(0x3fff_6dfb_23c6_51a2_ef22_0e2c_be1b_b800), Ld128::from_bits(0x3f98_541a_59f8_8abb_e777_df36_0e20_850e)],
    [Ld128::from_bits(0x3fff_6ff7_df95_1948_3cf8_7e1b_4f3e_2000), Ld128::from_bits(0x3f97_3bff_9b70_2d5a_a477_c125_23cd_ee98)],
    [Ld128::from_bits(0x3fff_71f7_5e8e_c5f7_3dd2_370f_2ef0_b000), Ld128::from_bits(0xbf98_949a_5e5a_54e9_30ba_efa9_12cd_d287)],
    [Ld128::from_bits(0x3fff_73f9_a48a_5817_3bd5_c9a4_e68a_b000), Ld128::from_bits(0x3f97_182a_e217_f3a7_6817_5955_3e84_36dd)],
    [Ld128::from_bits(0x3fff_75fe_b564_267c_8bf6_e9aa_33a4_8800), Ld128::from_bits(0x3f98_9383_8c02_f30d_0bdc_aa51_6d6c_373a)],
    [Ld128::from_bits(0x3fff_7806_94fd_e5d3_f619_ae02_8085_8800), Ld128::from_bits(0x3f98_95d9_5ee7_c366_8471_afd8_2607_751a)],
    [Ld128::from_bits(0x3fff_7a11_473e_b018_6d7d_5102_3f6c_d800), Ld128::from_bits(0x3f98_0faf_7a15_b34b_bcb0_298f_410d_9a4c)],
    [Ld128::from_bits(0x3fff_7c1e_d013_0c13_27c4_9334_4593_7800), Ld128::from_bits(0xbf98_4ea6_91b6_615d_81be_b881_59b1_ef6b)],
    [Ld128::from_bits(0x3fff_7e2f_336c_f4e6_2105_d02b_a157_9800), Ld128::from_bits(0xbf93_e8f5_ebd8_0703_20a0_c6f9_ef82_ad51)],
    [Ld128::from_bits(0x3fff_8042_7543_e1a1_1b60_de67_649a_3800), Ld128::from_bits(0xbf98_58ac_7ca3_8d93_a473_acc6_a041_dae1)],
    [Ld128::from_bits(0x3fff_8258_9994_cce1_28ac_f88a_fab3_4800), Ld128::from_bits(0x3f98_0087_b56b_2e5d_d607_a996_9cde_feff)],
    [Ld128::from_bits(0x3fff_8471_a462_3c7a_cce5_2f6b_97c6_4000), Ld128::from_bits(0x3f96_2a6e_1ea3_e910_2f22_9baf_0cc9_06c0)],
    [Ld128::from_bits(0x3fff_868d_99b4_492e_c80e_41d9_0ac2_5000), Ld128::from_bits(0x3f97_7074_84d7_3f13_6fb5_7796_56b6_e31b)],
    [Ld128::from_bits(0x3fff_88ac_7d98_a669_9665_30bc_df2d_5000), Ld128::from_bits(0xbf97_629e_d7c1_0c7a_21e8_f54d_f069_a588)],
    [Ld128::from_bits(0x3fff_8ace_5422_aa0d_b5ba_7c55_a192_c800), Ld128::from_bits(0x3f97_bb3e_6ed6_1f27_3330_4a34_6d8e_d0c0)],
    [Ld128::from_bits(0x3fff_8cf3_216b_5448_bef2_aa1c_d161_c800), Ld128::from_bits(0xbf98_513d_ab3d_b839_dd62_61ab_9b5c_eed1)],
    [Ld128::from_bits(0x3fff_8f1a_e991_5773_62b9_8274_5c72_f000), Ld128::from_bits(0xbf98_3fd8_81b2_5a8f_5d3a_8b5c_fb31_59ae)],
    [Ld128::from_bits(0x3fff_9145_b0b9_1ffc_588a_61b4_69f6_b800), Ld128::from_bits(0xbf96_e3fc_7aad_fbac_b677_9ec2_b1ce_1713)],
    [Ld128::from_bits(0x3fff_9373_7b0c_dc5e_4f45_01c3_f254_0800), Ld128::from_bits(0x3f98_1169_7e25_7ac0_db1f_4193_77f4_dd02)],
    [Ld128::from_bits(0x3fff_95a4_4cbc_8520_ee9b_4836_95a1_0000), Ld128::from_bits(0xbf98_c841_c14f_26a6_2eea_f8aa_69a9_4a98)],
    [Ld128::from_bits(0x3fff_97d8_29fd_e4e4_f8b9_e920_f91e_8800), Ld128::from_bits(0x3f98_ebf6_dceb_8a25_b7b4_0c04_2663_9aa7)],
    [Ld128::from_bits(0x3fff_9a0f_170c_a07b_9ba3_109b_8c46_7000), Ld128::from_bits(0x3f98_bdf5_8cf0_f56d_3412_e9e2_aba1_359a)],
    [Ld128::from_bits(0x3fff_9c49_182a_3f09_01c7_c46b_071f_2800), Ld128::from_bits(0x3f98_f2c6_ed6f_2861_0b8c_3648_5a2b_bd3a)],
    [Ld128::from_bits(0x3fff_9e86_319e_3232_3182_4ca7_8e64_c800), Ld128::from_bits(0xbf97_1fef_06d3_f7d4_4520_509f_a302_c745)],
    [Ld128::from_bits(0x3fff_a0c6_67b5_de56_4b29_ada8_b8ca_b000), Ld128::from_bits(0x3f98_a4d5_0211_546d_3ea2_8976_d62a_3327)],
    [Ld128::from_bits(0x3fff_a309_bec4_a2d3_358c_171f_770d_a800), Ld128::from_bits(0x3f98_6aa3_fd11_6136_8b47_53b1_6c2a_3fde)],
    [Ld128::from_bits(0x3fff_a550_3b23_e255_c8b4_2449_1caf_8800), Ld128::from_bits(0xbf95_0dfe_bd6f_eb1f_a3f0_420d_402c_4ce8)],
    [Ld128::from_bits(0x3fff_a799_e133_0b35_86f2_dfb2_b158_f000), Ld128::from_bits(0x3f97_a987_96ce_8908_ae85_2236_ca93_d3b8)],
    [Ld128::from_bits(0x3fff_a9e6_b557_9fdb_f43e_b243_bdff_5000), Ld128::from_bits(0xbf98_d9d3_a547_185c_d1a8_7c25_a305_9d80)],
    [Ld128::from_bits(0x3fff_ac36_bbfd_3f37_9c0d_b966_a312_6800), Ld128::from_bits(0xbf98_01c6_0dbf_c769_6f83_d342_b8c2_ac5e)],
    [Ld128::from_bits(0x3fff_ae89_f995_ad3a_d5e8_734d_1773_2000), Ld128::from_bits(0x3f95_69fe_f0eb_99d7_a910_2c58_b5ae_09d7)],
    [Ld128::from_bits(0x3fff_b0e0_7298_db66_5908_42ac_dfc6_f800), Ld128::from_bits(0xbf97_35f1_a235_1d55_0005_85fa_ab34_a6b3)],
    [Ld128::from_bits(0x3fff_b33a_2b84_f15f_af6b_fd0e_7bd9_4800), Ld128::from_bits(0xbf94_ed45_43f1_225b_276e_41bc_248f_3045)],
    [Ld128::from_bits(0x3fff_b597_28de_5593_98e3_8811_1164_8800), Ld128::from_bits(0xbf96_871d_1c02_077d_f7d2_83eb_35b5_ded5)],
    [Ld128::from_bits(0x3fff_b7f7_6f2f_b5e4_6eaa_7b08_1ab5_4000), Ld128::from_bits(0xbf98_d655_9bb7_e1e5_48da_4ed2_a99e_c4f3)],
    [Ld128::from_bits(0x3fff_ba5b_030a_1064_9840_cb3c_6af5_b800), Ld128::from_bits(0xbf98_c06b_46fe_4540_f19c_8a91_ba29_8b46)],
    [Ld128::from_bits(0x3fff_bcc1_e904_bc1d_2247_ba0f_45b3_d000), Ld128::from_bits(0x3f96_19a1_6405_0e12_57ab_37c9_5b30_9243)],
    [Ld128::from_bits(0x3fff_bf2c_25bd_71e0_8840_8d70_2518_e000), Ld128::from_bits(0x3f98_a24f_d039_d9ab_3b36_fdab_47f9_efeb)],
    [Ld128::from_bits(0x3fff_c199_bdd8_5529_c222_0cb1_2a09_1800), Ld128::from_bits(0x3f98_d333_ca22_4b25_1b33_0920_021c_b99d)],
    [Ld128::from_bits(0x3fff_c40a_b5ff_fd07_a6d1_4df8_20f1_8000), Ld128::from_bits(0x3f98_4529_b37e_9c3d_3dee_aa66_fb98_13fd)],
    [Ld128::from_bits(0x3fff_c67f_12e5_7d14_b4a2_137f_d20f_2800), Ld128::from_bits(0x3f98_980e_ecf3_58a8_d368_fcea_eafa_8fcc)],
    [Ld128::from_bits(0x3fff_c8f6_d940_6e7b_511a_cbc4_8805_c800), Ld128::from_bits(0xbf98_de91_2553_eff4_7067_3130_d7c4_ab8a)],
    [Ld128::from_bits(0x3fff_cb72_0dce_f906_9150_3cbd_1e94_a000), Ld128::from_bits(0xbf98_244f_1355_329f_9a49_1609_5331_032a)],
    [Ld128::from_bits(0x3fff_cdf0_b555_dc3f_9c44_f895_8fac_5000), Ld128::from_bits(0x3f97_be51_5f8c_58bd_fb6f_5740_a3a3_8552)],
    [Ld128::from_bits(0x3fff_d072_d4a0_7897_b8d0_f22f_21a1_5800), Ld128::from_bits(0x3f96_c31f_77f8_c4be_13e9_9948_10e8_7192)],
    [Ld128::from_bits(0x3fff_d2f8_7080_d89f_18ad_e123_989e_a000), Ld128::from_bits(0x3f98_012d_a62b_2a9f_ae6f_7264_9239_474f)],
    [Ld128::from_bits(0x3fff_d581_8dcf_ba48_725d_a05a_eb66_e000), Ld128::from_bits(0x3f96_b953_eb13_eab3_810e_dfe4_705f_6348)],
    [Ld128::from_bits(0x3fff_d80e_316c_9839_7bb8_4f9d_0488_0800), Ld128::from_bits(0xbf98_03da_09cf_590e_cb37_f910_3396_be39)],
    [Ld128::from_bits(0x3fff_da9e_603d_b328_5708_c01a_5b6d_5000), Ld128::from_bits(0xbf98_b404_edc8_789c_f589_b51b_3637_1837)],
    [Ld128::from_bits(0x3fff_dd32_1f30_1b46_04b6_95de_3c06_3000), Ld128::from_bits(0x3f96_4726_42a5_33c6_1a9f_6e6a_0786_9176)],
    [Ld128::from_bits(0x3fff_dfc9_7337_b9b5_eb96_8cac_39ed_2800), Ld128::from_bits(0x3f97_1b72_25a9_44ef_d5bb_5524_b927_250e)],
    [Ld128::from_bits(0x3fff_e264_614f_5a12_8a12_761f_a17a_d800), Ld128::from_bits(0x3f98_3233_f3bf_b9df_b2f0_264a_f14e_43a9)],
    [Ld128::from_bits(0x3fff_e502_ee78_b3ff_6273_d130_1539_9000), Ld128::from_bits(0x3f97_e8f4_9659_e169_3be1_7ae1_d2f8_8762)],
    [Ld128::from_bits(0x3fff_e7a5_1fbc_74c8_34b5_48b2_8323_7800), Ld128::from_bits(0x3f95_9d62_a13d_2558_d518_d290_5b36_467d)],
    [Ld128::from_bits(0x3fff_ea4a_fa2a_490d_9858_f73a_18f5_d800), Ld128::from_bits(0x3f98_980f_c36f_5103_0867_7709_f5bd_d803)],
    [Ld128::from_bits(0x3fff_ecf4_82d8_e67f_08db_0312_fb94_a000), Ld128::from_bits(0xbf98_885c_eff7_a25a_1d98_c6ab_7f90_5f8c)],
    [Ld128::from_bits(0x3fff_efa1_bee6_15a2_7771_fd21_a92d_b000), Ld128::from_bits(0xbf98_f049_1516_eb00_4b8d_c86c_0e10_9868)],
    [Ld128::from_bits(0x3fff_f252_b376_bba9_74e8_696f_c363_9000), Ld128::from_bits(0x3f96_a98d_5aa8_ed6a_2c5e_81c3_b351_0446)],
    [Ld128::from_bits(0x3fff_f507_65b6_e454_0674_f84b_7628_6000), Ld128::from_bits(0x3f98_5d7f_cc80_06fe_21a9_5d14_dc48_44b3)],
    [Ld128::from_bits(0x3fff_f7bf_dad9_cbe1_3891_3b4b_fe72_c000), Ld128::from_bits(0xbf98_351d_18c6_bf82_d96e_5dae_054f_4fe2)],
    [Ld128::from_bits(0x3fff_fa7c_1819_e90d_82e9_0a7e_74b2_6000), Ld128::from_bits(0x3f98_e0ee_0306_1b7b_b285_a607_919d_2286)],
    [Ld128::from_bits(0x3fff_fd3c_22b8_f71f_1097_5ba4_b32b_d000), Ld128::from_bits(0xbf96_8b43_da5b_2c4e_a507_cb6a_ef16_2b74)],
];

static STIRLING: [Ld128; 24] = [
    Ld128::from_bits(0x3ffb_5555_5555_5555_5555_5555_5555_5553),
    Ld128::from_bits(0xbff6_6c16_c16c_16c1_6c16_c16c_1696_5fcd),
    Ld128::from_bits(0x3ff4_a01a_01a0_1a01_a01a_018d_e649_2104),
    Ld128::from_bits(0xbff4_3813_8138_1381_3812_bc93_c97a_e614),
    Ld128::from_bits(0x3ff4_b951_e2b1_8ff2_3104_e91b_945c_eea5),
    Ld128::from_bits(0xbff5_f6ab_0d99_93bf_ee44_b505_d64d_40a7),
    Ld128::from_bits(0x3ff7_a41a_41a4_158f_ad1e_d2d2_19c3_acc7),
    Ld128::from_bits(0xbff9_e428_6cae_f3da_18c0_2313_226c_682a),
    Ld128::from_bits(0x3ffc_6fe9_6330_48e1_7262_d2fa_159a_b865),
    Ld128::from_bits(0xbfff_6476_661e_e1a9_b2c6_4d8c_cd50_d367),
    Ld128::from_bits(0x4002_ace3_4f68_d3b6_45e0_3205_1d51_2d3e),
    Ld128::from_bits(0xc006_39a9_001e_9fbb_ec1a_8450_3ef6_d6a8),
    Ld128::from_bits(0x400a_11d9_4e2f_d297_fd33_ebf3_07f7_8dc8),
    Ld128::from_bits(0xc00e_1837_4ddc_7b75_0b05_082a_2c4d_634f),
    Ld128::from_bits(0x4012_4771_9433_d89d_06e6_b026_502e_853e),
    Ld128::from_bits(0xc016_a2c1_ec9f_59aa_c654_8afe_e948_44e6),
    Ld128::from_bits(0x401b_13b3_3272_8223_c1f2_c702_9781_a74d),
    Ld128::from_bits(0xc01f_5c79_7dcb_9ab0_bceb_3453_e80c_761c),
    Ld128::from_bits(0x4023_8af2_5881_75bd_282a_004b_0a2d_af43),
    Ld128::from_bits(0xc027_78cb_80d2_3793_3dd6_a869_6d0f_5c3e),
    Ld128::from_bits(0x402b_1bd6_6720_fbda_8a70_a77c_b6a8_1714),
    Ld128::from_bits(0xc02e_37ff_f408_37eb_42d3_f31e_2202_d0e5),
    Ld128::from_bits(0x4030_b901_eac1_b213_cc1a_5d42_3b60_fafe),
    Ld128::from_bits(0xc032_2b19_6eee_ca86_0fdc_5903_bf1c_89f4),
];

static RATFUN_P: [Ld128; 13] = [
    Ld128::from_bits(0x3ffd_b6c5_3f73_77b8_3839_c8a2_92eb_a4cb),
    Ld128::from_bits(0x4009_5525_d2fa_bdc9_8add_0735_e377_cc11),
    Ld128::from_bits(0x4008_828d_4632_87fc_d966_e5fc_df11_3337),
    Ld128::from_bits(0x4005_06fb_12ff_abef_a68c_1915_e9a3_b5dd),
    Ld128::from_bits(0xc000_521a_ce98_6af8_206b_eb9e_a323_bdb3),
    Ld128::from_bits(0x4002_03e4_f5bd_5a46_c730_1989_4061_dc5f),
    Ld128::from_bits(0x3ffe_d1f1_0cd3_affd_e107_4842_4cac_843a),
    Ld128::from_bits(0xbffc_18a2_5fd7_1874_1f86_1d6b_e065_7201),
    Ld128::from_bits(0x3ff9_4b4d_d7f8_7f7b_2fe5_059d_b1f3_8d11),
    Ld128::from_bits(0x3ff6_2676_5192_8948_6ad7_f656_7480_d272),
    Ld128::from_bits(0xbff3_993f_4038_f27f_cd54_ca2f_ab1a_81b3),
    Ld128::from_bits(0x3ff0_0fa4_716e_a4c7_a4c6_a86e_c237_6faa),
    Ld128::from_bits(0xbfea_cdb3_a60a_2b34_c94a_134e_0688_886b),
];

static RATFUN_Q: [Ld128; 15] = [
    Ld128::from_bits(0x3fff_0000_0000_0000_0000_0000_0000_0000),
    Ld128::from_bits(0x400a_8e1f_57b7_523c_9daf_39c3_d266_583f),
    Ld128::from_bits(0x400a_5aed_96d0_b418_9c98_08f6_110c_0110),
    Ld128::from_bits(0xc006_8750_ba03_787c_d535_e7b4_b7e0_3744),
    Ld128::from_bits(0xc007_a63d_8452_fa8a_9cd2_b084_e7f6_15bd),
    Ld128::from_bits(0x4004_4acc_c363_8a07_40b0_1a3a_de56_5ece),
    Ld128::from_bits(0x4003_ab12_2ee1_1004_cfce_eb06_4669_8318),
    Ld128::from_bits(0xc001_4ad6_a79c_59bf_0b60_ca70_9289_b9b4),
    Ld128::from_bits(0xbffd_dd20_5e5b_982a_f312_3ab2_9fcd_1beb),
    Ld128::from_bits(0x3ffc_c3ca_19b2_2a4b_d170_adb0_ab3e_7243),
    Ld128::from_bits(0xbff9_0d5f_b16e_d592_4e83_90e5_f198_0492),
    Ld128::from_bits(0xbff6_0a64_dc5f_7e39_5fff_9cf0_f592_1d36),
    Ld128::from_bits(0x3ff3_ee6b_d277_c5b3_c2cf_fd2c_3bb6_1e5f),
    Ld128::from_bits(0xbff0_2776_6f92_41fe_8619_ce01_8c2e_db19),
    Ld128::from_bits(0x3feb_0d0a_6af0_b2cc_b0da_8170_4374_8c5b),
];

static LOG_HEAD: [Ld128; 129] = [
    Ld128::from_bits(0x0000_0000_0000_0000_0000_0000_0000_0000),
    Ld128::from_bits(0x3ff7_fe02_a6b1_0678_8fc3_7690_3920_0000),
    Ld128::from_bits(0x3ff8_fc0a_8b0f_c03e_3cf9_eda7_4d38_0000),
    Ld128::from_bits(0x3ff9_7b91_b07d_5b11_aa92_7f54_c718_0000),
    Ld128::from_bits(0x3ff9_f829_b0e7_8330_04cf_8fc1_3c7c_0000),
    Ld128::from_bits(0x3ffa_39e8_7b9f_ebd5_fa90_15b2_02ac_0000),
    Ld128::from_bits(0x3ffa_7745_8f63_2dcf_c463_4f2a_1ee4_0000),
    Ld128::from_bits(0x3ffa_b42d_d711_971b_ec28_d14c_7da0_0000),
    Ld128::from_bits(0x3ffa_f0a3_0c01_162a_6617_cc97_16ee_0000),
    Ld128::from_bits(0x3ffb_1653_6eea_37ae_0e86_25c1_73dd_0000),
    Ld128::from_bits(0x3ffb_341d_7961_bd1d_0929_9837_6105_0000),
    Ld128::from_bits(0x3ffb_51b0_73f0_6183_f692_78e6_86a3_0000),
    Ld128::from_bits(0x3ffb_6f0d_28ae_56b4_b9be_499b_9ed2_0000),
    Ld128::from_bits(0x3ffb_8c34_5d63_19b2_0f5a_cb42_a65f_0000),
    Ld128::from_bits(0x3ffb_a926_d3a4_ad56_3650_bd22_a9c4_0000),
    Ld128::from_bits(0x3ffb_c5e5_48f5_bc74_315d_617e_f816_0000),
    Ld128::from_bits(0x3ffb_e270_76e2_af2e_5e9e_a87f_fe20_0000),
    Ld128::from_bits(0x3ffb_fec9_131d_beab_aaa2_e519_9f93_0000),
    Ld128::from_bits(0x3ffc_0d77_e7cd_08e5_9669_7717_a40c_0000),
    Ld128::from_bits(0x3ffc_1b72_ad52_f67a_0290_6046_8e59_8000),
    Ld128::from_bits(0x3ffc_2955_2f81_ff52_34c0_5dc7_101f_8000),
    Ld128::from_bits(0x3ffc_371f_c201_e8f7_43bc_d96c_55e3_0000),
    Ld128::from_bits(0x3ffc_44d2_b6cc_b7d1_e67d_3d95_0f88_0000),
    Ld128::from_bits(0x3ffc_526e_5e3a_1b43_7a2e_401d_6e3c_8000),
    Ld128::from_bits(0x3ffc_5ff3_070a_793d_3c87_3e20_a072_0000),
    Ld128::from_bits(0x3ffc_6d60_fe71_9d21_c8d5_4765_c4cb_8000),
    Ld128::from_bits(0x3ffc_7ab8_9021_0d90_91be_36b2_d6a0_8000),
    Ld128::from_bits(0x3ffc_87fa_0652_0c91_0902_0090_17dc_8000),
    Ld128::from_bits(0x3ffc_9525_a9cf_456b_4764_1307_538b_8000),
    Ld128::from_bits(0x3ffc_a23b_c1fe_2b56_3193_711b_07a9_8000),
    Ld128::from_bits(0x3ffc_af3c_94e8_0bff_2d8c_e601_937d_0000),
    Ld128::from_bits(0x3ffc_bc28_6742_d8cd_629f_9ce8_90e2_0000),
    Ld128::from_bits(0x3ffc_c8ff_7c79_a9a2_1ac2_5d81_ef30_0000),
    Ld128::from_bits(0x3ffc_d5c2_16b4_fbb9_15b9_10d6_5f93_8000),
    Ld128::from_bits(0x3ffc_e270_76e2_af2e_5e9e_a87f_fe20_0000),
    Ld128::from_bits(0x3ffc_ef0a_dcbd_c593_6521_8de5_4370_8000),
    Ld128::from_bits(0x3ffc_fb91_86d5_e3e2_a8d5_5466_c379_8000),
    Ld128::from_bits(0x3ffd_0402_594b_4d04_0dae_27bd_0b5f_c000),
    Ld128::from_bits(0x3ffd_0a32_4e27_390e_35f7_3f7a_0187_0000),
    Ld128::from_bits(0x3ffd_1058_bf9a_e4ad_5189_fa0a_b4cb_4000),
    Ld128::from_bits(0x3ffd_1675_caba_ba60_e039_cc7d_5710_8000),
    Ld128::from_bits(0x3ffd_1c89_8c16_999f_afbc_68e7_5403_8000),
    Ld128::from_bits(0x3ffd_2294_1fbc_f796_5a24_2853_da75_c000),
    Ld128::from_bits(0x3ffd_2895_a13d_e86a_35eb_4930_4fc1_0000),
    Ld128::from_bits(0x3ffd_2e8e_2bae_11d3_09c2_cc91_a850_8000),
    Ld128::from_bits(0x3ffd_347d_d9a9_87d5_4d64_5674_fedc_c000),
    Ld128::from_bits(0x3ffd_3a64_c556_945e_9c72_f35c_d740_c000),
    Ld128::from_bits(0x3ffd_4043_0868_6a7e_3bd0_c127_df4c_8000),
    Ld128::from_bits(0x3ffd_4618_bc21_c5ec_27d0_b7b3_7b33_c000),
    Ld128::from_bits(0x3ffd_4be5_f957_778a_0db4_c994_9f6f_c000),
    Ld128::from_bits(0x3ffd_51aa_d872_df82_d09c_93d6_0cfa_c000),
    Ld128::from_bits(0x3ffd_5767_7174_55a6_c549_ab6c_a0d9_8000),
    Ld128::from_bits(0x3ffd_5d1b_dbf5_809c_a508_d8e0_f720_0000),
    Ld128::from_bits(0x3ffd_62c8_2f2b_9c79_52f6_f5f2_2a60_0000),
    Ld128::from_bits(0x3ffd_686c_81e9_b14a_ec44_2be1_014e_4000),
    Ld128::from_bits(0x3ffd_6e08_eaa2_ba1e_38c1_3931_8d71_8000),
    Ld128::from_bits(0x3ffd_739d_7f6b_bd00_69ce_24c5_3fad_4000),
    Ld128::from_bits(0x3ffd_792a_55fd_d47a_27c1_5da4_7fa7_c000),
    Ld128::from_bits(0x3ffd_7eaf_83b8_2afc_364b_3a5e_7b4a_4000),
    Ld128::from_bits(0x3ffd_842d_1da1_e8b1_7493_b146_5e11_8000),
    Ld128::from_bits(0x3ffd_89a3_386c_1425_ab5a_7188_1103_c000),
    Ld128::from_bits(0x3ffd_8f11_e873_662c_77e1_769d_5698_8000),
    Ld128::from_bits(0x3ffd_9479_41c2_116f_aba4_cdd1_47d1_0000),
    Ld128::from_bits(0x3ffd_99d9_5811_7e08_acba_92ee_c478_4000),
    Ld128::from_bits(0x3ffd_9f32_3ecb_f984_bf2b_68d7_66f4_0000),
    Ld128::from_bits(0x3ffd_a484_090e_5bb0_a2bf_ca6b_70eb_4000),
    Ld128::from_bits(0x3ffd_a9ce_c9a9_a084_98d4_84ff_52f2_4000),
    Ld128::from_bits(0x3ffd_af12_9324_7786_b113_3844_a15d_c000),
    Ld128::from_bits(0x3ffd_b44f_77bc_c8f6_28cb_eeda_ae99_0000),
    Ld128::from_bits(0x3ffd_b985_8969_310f_b598_fb14_f88f_0000),
    Ld128::from_bits(0x3ffd_beb4_d9da_71b7_bf78_61d3_7abb_c000),
    Ld128::from_bits(0x3ffd_c3dd_7a7c_dad4_d73b_3c14_b7a9_c000),
    Ld128::from_bits(0x3ffd_c8ff_7c79_a9a2_1ac2_5d81_ef30_0000),
    Ld128::from_bits(0x3ffd_ce1a_f0b8_5f3e_b7b7_d2bc_aad0_8000),
    Ld128::from_bits(0x3ffd_d32f_e7e0_0ebd_561d_ec8c_bebe_8000),
    Ld128::from_bits(0x3ffd_d83e_7258_a2f3_e505_15ba_2ec9_4000),
    Ld128::from_bits(0x3ffd_dd46_a04c_1c4a_0bee_626a_49d1_c000),
    Ld128::from_bits(0x3ffd_e248_81a7_c6c2_61cb_d8f4_5954_c000),
    Ld128::from_bits(0x3ffd_e744_261d_6878_7e37_da36_f3cb_c000),
    Ld128::from_bits(0x3ffd_ec39_9d24_68cc_0175_cee5_3f35_4000),
    Ld128::from_bits(0x3ffd_f128_f5fa_f06e_cb35_c83b_1131_c000),
    Ld128::from_bits(0x3ffd_f612_3fa7_028a_c614_56c3_cb6c_c000),
    Ld128::from_bits(0x3ffd_faf5_88f7_8f31_ed9a_fb3e_4ea8_8000),
    Ld128::from_bits(0x3ffd_ffd2_e085_7f49_8559_7d03_64c8_8000),
    Ld128::from_bits(0x3ffe_0255_2a5a_5d0f_ec69_c695_d7ee_8000),
    Ld128::from_bits(0x3ffe_04bd_f9da_926d_265f_cc10_08b2_8000),
    Ld128::from_bits(0x3ffe_0723_e5c1_cdf4_04e5_7963_8911_6000),
    Ld128::from_bits(0x3ffe_0986_f4f5_7352_0b91_fda9_4ff4_4000),
    Ld128::from_bits(0x3ffe_0be7_2e42_52a8_2b69_897b_b33e_0000),
    Ld128::from_bits(0x3ffe_0e44_985d_1cc8_bf6e_ae5d_e969_6000),
    Ld128::from_bits(0x3ffe_109f_39e2_d4c9_6fde_3ec9_b0b7_a000),
    Ld128::from_bits(0x3ffe_12f7_1959_3efb_c530_1231_9c7d_0000),
    Ld128::from_bits(0x3ffe_154c_3d2f_4d5e_9a98_f33a_3965_e000),
    Ld128::from_bits(0x3ffe_179e_abbd_899a_0bfc_60e6_fa07_e000),
    Ld128::from_bits(0x3ffe_19ee_6b46_7c96_ecc5_cbdd_7781_e000),
    Ld128::from_bits(0x3ffe_1c3b_81f7_13c2_4bc9_4f8e_cdfb_c000),
    Ld128::from_bits(0x3ffe_1e85_f5e7_040d_03de_c59a_5f3e_4000),
    Ld128::from_bits(0x3ffe_20cd_cd19_2ab6_d935_03d0_f75c_0000),
    Ld128::from_bits(0x3ffe_2313_0d7b_ebf4_282d_e368_722c_a000),
    Ld128::from_bits(0x3ffe_2555_bce9_8f7c_b3c0_43ad_ad10_4000),
    Ld128::from_bits(0x3ffe_2795_e128_9b11_aeb7_83f3_db96_8000),
    Ld128::from_bits(0x3ffe_29d3_7fec_2b08_ac85_cd6c_ba5c_c000),
    Ld128::from_bits(0x3ffe_2c0e_9ed4_48e8_bb97_a9c3_1ba2_a000),
    Ld128::from_bits(0x3ffe_2e47_436e_4026_8405_4218_6922_2000),
    Ld128::from_bits(0x3ffe_307d_7334_f10b_e1fb_590a_1f56_6000),
    Ld128::from_bits(0x3ffe_32b1_3391_21d7_1320_556b_67b2_2000),
    Ld128::from_bits(0x3ffe_34e2_89d9_ce1d_316e_b92d_885c_e000),
    Ld128::from_bits(0x3ffe_3711_7b54_747b_5c5d_d024_844d_e000),
    Ld128::from_bits(0x3ffe_393e_0d35_62a1_9a9c_4426_036e_0000),
    Ld128::from_bits(0x3ffe_3b68_449f_ffc2_2af8_edec_1859_4000),
    Ld128::from_bits(0x3ffe_3d90_26a7_156f_aa40_4263_d0ad_2000),
    Ld128::from_bits(0x3ffe_3fb5_b84d_16f4_25b4_e9d5_05ca_c000),
    Ld128::from_bits(0x3ffe_41d8_fe84_672a_e646_4bcc_2f46_0000),
    Ld128::from_bits(0x3ffe_43f9_fe2f_9ce6_77a7_27b9_b60e_e000),
    Ld128::from_bits(0x3ffe_4618_bc21_c5ec_27d0_b7b3_7b33_c000),
    Ld128::from_bits(0x3ffe_4835_3d1e_a88d_f73d_5e8b_b302_0000),
    Ld128::from_bits(0x3ffe_4a4f_85db_03eb_b022_7bf4_7a6e_c000),
    Ld128::from_bits(0x3ffe_4c67_9afc_cee3_9b16_8ecd_d318_6000),
    Ld128::from_bits(0x3ffe_4e7d_811b_75bb_09cb_0985_6458_6000),
    Ld128::from_bits(0x3ffe_5091_3cc0_1686_b4bc_b3a5_b0b5_6000),
    Ld128::from_bits(0x3ffe_52a2_d265_bc5a_aee7_7c8a_f15b_2000),
    Ld128::from_bits(0x3ffe_54b2_4679_9949_7a91_5428_b43d_8000),
    Ld128::from_bits(0x3ffe_56bf_9d5b_3f39_9411_c621_7364_0000),
    Ld128::from_bits(0x3ffe_58ca_db5c_d798_9309_2f25_d930_8000),
    Ld128::from_bits(0x3ffe_5ad4_04c3_59f2_cfb2_9aaa_5f02_4000),
    Ld128::from_bits(0x3ffe_5cdb_1dc6_c176_48cf_6e3c_5d70_8000),
    Ld128::from_bits(0x3ffe_5ee0_2a92_4167_570d_6095_fd24_2000),
    Ld128::from_bits(0x3ffe_60e3_2f44_788d_8ca7_c895_a0b4_e000),
    Ld128::from_bits(0x3ffe_62e4_2fef_a39e_f357_93c7_6730_0000),
];

static LOG_TAIL: [Ld128; 129] = [
    Ld128::from_bits(0x0000_0000_0000_0000_0000_0000_0000_0000),
    Ld128::from_bits(0xbf98_1ebe_96a6_1269_e083_2fc6_2bc4_c7ec),
    Ld128::from_bits(0xbf96_50aa_4829_f882_df84_4759_945d_7e04),
    Ld128::from_bits(0xbf99_43fe_232b_0efd_5ade_2e67_765a_4412),
    Ld128::from_bits(0xbf96_bac0_a2a2_0a3d_6644_194a_5c41_2715),
    Ld128::from_bits(0xbf98_bac6_e550_a3c3_dc85_9cfe_2e17_8a7e),
    Ld128::from_bits(0x3f99_4b05_8f26_fdc0_6caa_2763_2c1f_59d3),
    Ld128::from_bits(0xbf99_2645_ad50_c767_2fc0_eb08_d862_221d),
    Ld128::from_bits(0x3f99_665e_2634_d1d3_4cdd_6d49_659c_6148),
    Ld128::from_bits(0x3f98_92f2_36d2_1482_d334_2d35_569b_f366),
    Ld128::from_bits(0xbf98_7645_7ef2_f89a_d243_dcc3_578c_f7e4),
    Ld128::from_bits(0xbf95_ba9e_d0d8_e07d_90f0_7bc8_51a5_a7ba),
    Ld128::from_bits(0xbf99_926f_cc6b_cf84_26bd_e008_371f_b432),
    Ld128::from_bits(0xbf98_2a5e_547e_cfe0_df94_1d9d_a5c3_3166),
    Ld128::from_bits(0xbf99_56ce_1958_2607_744b_19cb_f885_53b8),
    Ld128::from_bits(0x3f97_b176_9d96_6af8_dc37_72ca_c116_3e7f),
    Ld128::from_bits(0xbf97_61ea_a246_b143_bfe8_0906_a822_f768),
    Ld128::from_bits(0x3f98_271d_ff48_f15d_4090_1763_0a93_9313),
    Ld128::from_bits(0x3f99_5747_1213_2d3f_6340_e183_be20_31c6),
    Ld128::from_bits(0x3f99_739f_9de3_f642_654c_bb04_a9b5_01b8),
    Ld128::from_bits(0xbf98_0597_7b02_1b7c_7840_eb02_2964_fe07),
    Ld128::from_bits(0x3f98_3f97_40f9_936d_53a9_4819_4fba_272a),
    Ld128::from_bits(0xbf98_e1f3_be9a_8337_4584_faad_83fa_4fec),
    Ld128::from_bits(0x3f99_8cd3_6de6_31da_a222_aa1c_c5ec_53df),
    Ld128::from_bits(0x3f98_23ba_fe6a_ae39_aafe_f9f3_18e0_567f),
    Ld128::from_bits(0x3f99_0de3_7da3_2582_5ce3_6b07_bb93_a36e),
    Ld128::from_bits(0xbf98_f7f9_b801_eb6b_277e_f4d4_a89c_e9a3),
    Ld128::from_bits(0x3f98_977a_d2ab_825b_5bf5_a75f_5145_3669),
    Ld128::from_bits(0x3f97_2cec_4ca0_bed3_cf71_7669_4713_daa2),
    Ld128::from_bits(0x3f98_8c27_e3f1_b66d_8b32_de61_c04c_f955),
    Ld128::from_bits(0xbf99_851a_2625_91d1_968a_bcd7_ad62_7745),
    Ld128::from_bits(0xbf98_561e_1d3c_235b_937c_3292_e61a_1657),
    Ld128::from_bits(0xbf96_1976_d471_342b_17dc_a47c_9d1e_1d98),
    Ld128::from_bits(0xbf99_7fc7_8726_30bb_5018_e5a2_b48c_cbe1),
    Ld128::from_bits(0xbf98_61ea_a246_b143_bfe8_0906_a822_f768),
    Ld128::from_bits(0x3f95_90a7_d694_261a_0e91_f0e8_f296_0d28),
    Ld128::from_bits(0xbf99_969a_fb6f_e9ee_ea93_74df_a13a_6823),
    Ld128::from_bits(0xbf97_6a1b_bb89_9f34_3f10_5ee3_7caf_a256),
    Ld128::from_bits(0x3f94_8714_6f01_ad7d_f04b_96f1_b6ef_1d0f),
    Ld128::from_bits(0xbf98_c60f_598d_3a32_0763_76a5_960e_734d),
    Ld128::from_bits(0xbf99_1d1f_703e_60be_d6f0_f982_b2cf_0dc9),
    Ld128::from_bits(0x3f98_dde1_9dc4_1775_af65_7aec_9b25_5656),
    Ld128::from_bits(0x3f99_432f_4ba6_ab4d_e9e1_d8b9_d1f8_9d95),
    Ld128::from_bits(0x3f96_cb16_b51d_565f_2c2b_d5bf_133b_6b2d),
    Ld128::from_bits(0x3f95_b3cd_edde_b5be_c89b_c548_4d33_c99d),
    Ld128::from_bits(0x3f95_0f72_8852_c059_d987_7abf_c1e5_13f4),
    Ld128::from_bits(0x3f99_08df_5bd1_e773_f014_f237_099a_6ff2),
    Ld128::from_bits(0xbf99_b59e_a6f9_f609_89b9_7497_cac3_77e5),
    Ld128::from_bits(0x3f97_cd10_5772_cd24_c00b_4439_3cb5_eeb5),
    Ld128::from_bits(0x3f99_8647_ae54_d161_9cf4_bc14_fd5a_d95a),
    Ld128::from_bits(0xbf99_0e77_1585_8654_1a02_8fb5_0778_1969),
    Ld128::from_bits(0x3f96_7a01_f170_6866_327e_f7c0_5062_8f2d),
    Ld128::from_bits(0xbf97_eea6_0c7f_4b59_4bd6_5b44_f6b2_0634),
    Ld128::from_bits(0x3f99_ca2e_7226_c55d_d257_f44b_5002_c8cd),
    Ld128::from_bits(0xbf97_e5a6_d212_12e3_cc6a_669a_dc05_651a),
    Ld128::from_bits(0xbf96_e87e_74a8_c163_34fc_11ee_4cf5_2133),
    Ld128::from_bits(0xbf95_0869_5488_7bc8_c569_a2a1_110d_b61f),
    Ld128::from_bits(0xbf98_4bf5_301e_6887_3e38_1421_50ac_856d),
    Ld128::from_bits(0x3f99_410d_c583_2ff2_fdc7_ba35_2cf3_419e),
    Ld128::from_bits(0x3f99_d9a2_3c11_851c_7ce0_3e57_b4c9_dcf5),
    Ld128::from_bits(0x3f95_56cf_ff18_ca06_d014_568c_7d40_7dce),
    Ld128::from_bits(0xbf99_759a_18d0_0d0f_c6ea_fbc4_5cd7_cba3),
    Ld128::from_bits(0x3f97_baba_929c_c25d_ca0f_a1a7_e331_9e33),
    Ld128::from_bits(0xbf98_c811_6d12_38da_82ed_7376_9289_c1c2),
    Ld128::from_bits(0x3f97_4886_067d_20ff_b345_47d7_c2b3_8ad8),
    Ld128::from_bits(0x3f98_d259_39d6_f50c_6b63_5ed1_4681_944b),
    Ld128::from_bits(0x3f99_435e_f847_f23b_899d_a311_3a7c_d6aa),
    Ld128::from_bits(0x3f96_4061_c4d0_497c_8706_4855_f109_97ab),
    Ld128::from_bits(0xbf99_e1c4_37eb_152c_bde7_f0c3_bb95_5db8),
    Ld128::from_bits(0xbf98_e308_6fc6_2a5c_efef_d7d2_7d9b_5060),
    Ld128::from_bits(0x3f95_ac96_d4b0_6f84_008c_ecca_524b_dd34),
    Ld128::from_bits(0xbf99_927d_12b9_c6a0_9faf_d980_618b_50a5),
    Ld128::from_bits(0xbf97_1976_d471_342b_17dc_a47c_9d1e_1d98),
    Ld128::from_bits(0x3f99_9d27_10c6_4600_597b_7959_1ccc_3c89),
    Ld128::from_bits(0x3f98_b7e8_c55a_6ffa_f7eb_72c1_ff89_3cd7),
    Ld128::from_bits(0x3f97_10ea_5094_cc18_2477_ebd8_0350_800d),
    Ld128::from_bits(0x3f99_b87f_a7d4_1a13_39ae_bf3f_5649_43fe),
    Ld128::from_bits(0xbf99_b9c9_d5fe_1074_4d8f_096f_34de_2bd6),
    Ld128::from_bits(0xbf98_7225_fdaf_38ea_ad08_ff57_6fab_549e),
    Ld128::from_bits(0xbf97_a404_f768_d035_f142_71ae_ec66_64f0),
    Ld128::from_bits(0x3f98_ebae_7ab2_488b_a14f_63a3_d8f5_2e71),
    Ld128::from_bits(0x3f99_0521_9512_0a66_0582_4e07_db9d_a6ed),
    Ld128::from_bits(0xbf99_404e_4acc_8744_39ec_8e12_4672_d17c),
    Ld128::from_bits(0xbf99_436e_4732_18b0_565c_759e_6531_31d4),
    Ld128::from_bits(0xbf8f_cb91_b474_73b3_cb14_4761_5daa_6e30),
    Ld128::from_bits(0xbf99_04ac_97b8_ddc7_8779_c7d6_07d8_7102),
    Ld128::from_bits(0x3f99_d56c_ade9_75d4_8448_43dd_73a0_2845),
    Ld128::from_bits(0xbf93_fc7e_ec0e_ca5d_9c76_0ec3_b421_c64b),
    Ld128::from_bits(0xbf93_9649_bc99_0440_ca2c_12ee_56f6_c90b),
    Ld128::from_bits(0x3f97_f1a3_f759_ee14_5b43_0bd0_90b3_c6bb),
    Ld128::from_bits(0xbf99_ce83_6fa7_0641_9be0_6d47_b1d7_7e35),
    Ld128::from_bits(0x3f99_a968_93b2_757f_5012_3379_aecd_147c),
    Ld128::from_bits(0x3f97_4054_ed3a_330f_341c_f1fa_ee26_dfe9),
    Ld128::from_bits(0xbf99_a3ca_9c72_09e6_e27a_e0e4_ade9_0780),
    Ld128::from_bits(0xbf96_8551_df0e_2bf2_7a79_1c59_202c_e26d),
    Ld128::from_bits(0x3f98_77e3_bfa6_11bc_d977_c6e7_1bc0_aacb),
    Ld128::from_bits(0xbf97_ca0d_1835_b0b7_e896_952c_6065_b4e4),
    Ld128::from_bits(0xbf98_3db0_bb5b_f2b7_6be2_56c1_a2a0_8a80),
    Ld128::from_bits(0x3f98_2052_38de_6fe6_0fad_8636_302d_4f85),
    Ld128::from_bits(0xbf97_8ef7_b8af_5f91_4cfe_517c_f701_35ef),
    Ld128::from_bits(0x3f98_c7fe_01a9_3eb9_84a1_9dde_fa3a_1beb),
    Ld128::from_bits(0x3f99_f6d7_433f_07d5_659a_842a_99cc_e924),
    Ld128::from_bits(0xbf96_9dab_7eb5_720f_7a91_75cd_25a4_f8a7),
    Ld128::from_bits(0xbf98_53b6_b4c3_5aeb_4ddc_50e8_c743_2437),
    Ld128::from_bits(0x3f99_b37b_8602_dc04_cce0_466e_a450_1082),
    Ld128::from_bits(0x3f99_ac19_c56e_84cd_18b7_7e52_f79a_ce95),
    Ld128::from_bits(0x3f98_3ab9_298e_efe9_c15b_5f20_84e3_b2bd),
    Ld128::from_bits(0xbf94_b83b_5393_3c9e_bf49_e4d9_79f7_7ac3),
    Ld128::from_bits(0xbf99_cf1c_277a_3a0d_863f_efb3_67ef_8616),
    Ld128::from_bits(0xbf99_32f8_a486_4991_a9b9_6ae1_bcb5_948f),
    Ld128::from_bits(0x3f98_e7b5_c04e_cb4a_a56f_8ffc_9b05_e81e),
    Ld128::from_bits(0xbf98_10c9_bd89_8662_9a5a_46a5_8347_74b9),
    Ld128::from_bits(0x3f96_7795_3889_0dd4_4ead_eb32_e848_f817),
    Ld128::from_bits(0x3f96_96d8_376e_e985_fcf9_ccc2_35c4_75c3),
    Ld128::from_bits(0x3f98_cd10_5772_cd24_c00b_4439_3cb5_eeb5),
    Ld128::from_bits(0xbf97_7b4f_3e10_4187_cc8a_ca35_8d92_63f9),
    Ld128::from_bits(0x3f97_b631_6e6f_7191_d8af_47e7_445b_f1a6),
    Ld128::from_bits(0x3f99_fb0c_ed86_c44d_df1c_7aac_b0c6_de95),
    Ld128::from_bits(0xbf99_4479_79d0_a1ae_fdc2_22e9_b08d_856d),
    Ld128::from_bits(0x3f99_87b4_bc8e_7b62_a627_2ecb_78ea_c278),
    Ld128::from_bits(0x3f99_eba9_efb4_2483_da93_0e6c_c7a8_e22e),
    Ld128::from_bits(0x3f97_7968_945d_56af_714e_bab5_f991_6e79),
    Ld128::from_bits(0xbf97_a632_3ea9_ce40_a3ca_f6ba_ebad_2c64),
    Ld128::from_bits(0x3f99_6154_4f18_06ac_ad71_11b1_edf3_bf1d),
    Ld128::from_bits(0xbf98_95fb_dd3e_30fd_d43f_4f19_8444_5626),
    Ld128::from_bits(0x3f97_8af6_0250_ae32_8eb0_db90_f872_812e),
    Ld128::from_bits(0x3f94_f7a6_314f_8257_273d_1498_4f33_4408),
    Ld128::from_bits(0x3f99_9550_cd45_f38d_d6b3_2aaf_c2a5_804b),
    Ld128::from_bits(0x3f98_f97b_57a0_79a1_9339_4c5b_16c5_068c),
];

static LOG_SERIES: [Ld128; 7] = [
    Ld128::from_bits(0x3ffb_5555_5555_5555_5555_5555_5555_5555),
    Ld128::from_bits(0x3ff8_9999_9999_9999_9999_9999_9999_999a),
    Ld128::from_bits(0x3ff6_2492_4924_9249_2492_4924_9249_2492),
    Ld128::from_bits(0x3ff3_c71c_71c7_1c71_c71c_71c7_1c71_c71c),
    Ld128::from_bits(0x3ff1_745d_1745_d174_5d17_45d1_745d_1746),
    Ld128::from_bits(0x3fef_3b13_b13b_13b1_3b13_b13b_13b1_3b14),
    Ld128::from_bits(0x3fed_1111_1111_1111_1111_1111_1111_1111),
];

pub(super) static CONSTS: LdConsts<Ld128> = LdConsts {
    invpio2: Ld128::from_bits(0x3ffe_45f3_06dc_9c88_2a53_f84e_afa3_ea6a),
    pio2_1: Ld128::from_bits(0x3fff_921f_b544_42d1_8469_8000_0000_0000),
    pio2_1t: Ld128::from_bits(0x3fba_3198_a2e0_3707_344a_4093_8222_99f3),
    pio2_2: Ld128::from_bits(0x3fba_3198_a2e0_3707_344a_4000_0000_0000),
    pio2_2t: Ld128::from_bits(0x3f71_2704_4533_e63a_0105_df53_1d89_cd91),
    pio2_3: Ld128::from_bits(0x3f71_2704_4533_e63a_0105_e000_0000_0000),
    pio2_3t: Ld128::from_bits(0xbf28_59c4_ec64_ddae_b5f7_8671_cbfb_2210),
    medium_limit: Ld128::from_bits(0x402c_921f_b544_42d1_8469_898c_c517_01b8),
    round2: 51,
    round3: 119,
    chunks: 5,
    large_prec: 3,
    pio4: Ld128::from_bits(0x3ffe_921f_b544_42d1_8469_898c_c517_01b8),
    pio4_lo: Ld128::from_bits(0x3f8b_cd12_9024_e088_a67c_c740_20bb_ea64),
    tan_reflect: Ld128::from_bits(0x3ffe_594a_f4f0_d844_d013_a92a_3055_3261),
    sin: &SIN,
    cos: &COS,
    tan: &TAN,
    pi_hi: Ld128::from_bits(0x4000_921f_b544_42d1_8460_0000_0000_0000),
    pi_lo: Ld128::from_bits(0x3fc3_3131_98a2_e037_0734_4a40_9382_229a),
    inv_l: Ld128::from_bits(0x4006_7154_7652_b82f_e177_7d0f_fda0_d23a),
    l1: Ld128::from_bits(0x3ff7_62e4_2fef_a39e_f357_93c7_6700_0000),
    l2: Ld128::from_bits(0x3f9c_803f_2f6a_f40f_3432_6729_8b62_d8a1),
    exp_poly: &EXP_POLY,
    exp_tbl: &EXP_TBL,
    o_threshold: Ld128::from_bits(0x400c_62e4_2fef_a39e_f357_93c7_6730_07e5),
    u_threshold: Ld128::from_bits(0xc00c_654b_b3b2_c73e_bb05_9fab_b506_ff34),
    expm1_poly: &EXPM1_POLY,
    expm1_bound: Ld128::from_bits(0x3ffc_53c3_6113_404e_a4a8_c154_c985_f06f),
};

pub(super) static GAMMA: GammaConsts<Ld128> = GammaConsts {
    stirling: &STIRLING,
    ratfun_p: &RATFUN_P,
    ratfun_q: &RATFUN_Q,
    log_head: &LOG_HEAD,
    log_tail: &LOG_TAIL,
    log_series: &LOG_SERIES,
    // 2^12 + 1: its ulp, 2^-100, is the grid LOG_HEAD is stored on
    log_round: Ld128::from_bits(0x400b_0010_0000_0000_0000_0000_0000_0000),
    x0: Ld128::from_bits(0x3ffd_d8b6_18d5_af8f_db86_a722_1978_293c),
    a0_hi: Ld128::from_bits(0x3ffe_c56d_c82a_74ae_e8d8_8515_66d4_0f33),
    a0_lo: Ld128::from_bits(0xbf8b_c499_e5ea_2f4f_2b0c_6a86_a1ae_5e42),
    left: Ld128::from_bits(0xbffd_9500_0000_0000_0000_0000_0000_0000),
    lns2pi_hi: Ld128::from_bits(0x3ffd_ad00_0000_0000_0000_0000_0000_0000),
    lns2pi_lo: Ld128::from_bits(0xbfed_c6f3_6829_6b2d_ad0d_bffa_ef9b_7f71),
    xmax: Ld128::from_bits(0x4009_b6e3_180c_d66a_5c42_06f1_28ba_77f4),
    iota: Ld128::from_bits(0x3f8a_0000_0000_0000_0000_0000_0000_0000),
    pi: Ld128::from_bits(0x4000_921f_b544_42d1_8469_898c_c517_01b8),
    tiny: Ld128::from_bits(0x18ef_0000_0000_0000_0000_0000_0000_0000),
    neg_log_limit: Ld128::from_bits(0xc009_b680_0000_0000_0000_0000_0000_0000),
    neg_underflow: Ld128::from_bits(0xc009_c200_0000_0000_0000_0000_0000_0000),
};
