//! Coefficients and split constants for the x87 extended format.
//!
//! Minimax fits were made for a 64-bit significand; split constants carry
//! enough trailing zeros that the products the kernels form with them
//! are exact.

use super::super::gamma::GammaConsts;
use super::{Ld80, LdConsts};

static SIN: [Ld80; 8] = [
    Ld80::from_parts(0xbffc, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ff8, 0x8888888888888887),
    Ld80::from_parts(0xbff2, 0xd00d00d00d00c526),
    Ld80::from_parts(0x3fec, 0xb8ef1d2ab616430e),
    Ld80::from_parts(0xbfe5, 0xd7322b3f3990c786),
    Ld80::from_parts(0x3fde, 0xb0922fda83b48a1d),
    Ld80::from_parts(0xbfd6, 0xd73e29e67e33c9a9),
    Ld80::from_parts(0x3fce, 0xc9215e42a2148cee),
];

static COS: [Ld80; 8] = [
    Ld80::from_parts(0x3ffa, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0xbff5, 0xb60b60b60b60b60b),
    Ld80::from_parts(0x3fef, 0xd00d00d00d00cbb0),
    Ld80::from_parts(0xbfe9, 0x93f27dbbc4ecbdf2),
    Ld80::from_parts(0x3fe2, 0x8f76c77f99b60a4e),
    Ld80::from_parts(0xbfda, 0xc9cba4aa2485adf2),
    Ld80::from_parts(0x3fd2, 0xd73e74708587c315),
    Ld80::from_parts(0xbfca, 0xb2e96051fbc3e9e0),
];

static TAN: [Ld80; 17] = [
    Ld80::from_parts(0x3ffd, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ffc, 0x8888888888888882),
    Ld80::from_parts(0x3ffa, 0xdd0dd0dd0dd0f1f4),
    Ld80::from_parts(0x3ff9, 0xb327a441607a355a),
    Ld80::from_parts(0x3ff8, 0x91371aaf3ab8ffe3),
    Ld80::from_parts(0x3ff6, 0xeb69e86ebe62613b),
    Ld80::from_parts(0x3ff5, 0xbed1b26ca799abbe),
    Ld80::from_parts(0x3ff4, 0x9aac0be2f2c8805f),
    Ld80::from_parts(0x3ff2, 0xfabf98a89d9c4584),
    Ld80::from_parts(0x3ff1, 0xcb340f1264bdda13),
    Ld80::from_parts(0x3ff0, 0xa5266a5695cb11e9),
    Ld80::from_parts(0x3fef, 0x82b3c1f6229d8825),
    Ld80::from_parts(0x3fed, 0xf5c190c8e9ab0860),
    Ld80::from_parts(0x3feb, 0x849b6d425dece88b),
    Ld80::from_parts(0x3fec, 0xd465ebcee4ecf7b2),
    Ld80::from_parts(0xbfeb, 0xb0acbe235ec651ef),
    Ld80::from_parts(0x3fea, 0xfca86dd45aa20f4a),
];

static EXP_POLY: [Ld80; 6] = [
    Ld80::from_parts(0x3ffe, 0x8000000000000000),
    Ld80::from_parts(0x3ffc, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ffa, 0xaaaaaaaaaaa749dd),
    Ld80::from_parts(0x3ff8, 0x888888888887082d),
    Ld80::from_parts(0x3ff5, 0xb60b630dea8ec3f2),
    Ld80::from_parts(0x3ff2, 0xd00d02e545292ae1),
];

static EXPM1_POLY: [Ld80; 11] = [
    Ld80::from_parts(0x3ffc, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ffa, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ff8, 0x8888888888888889),
    Ld80::from_parts(0x3ff5, 0xb60b60b60b6081db),
    Ld80::from_parts(0x3ff2, 0xd00d00d00d00b438),
    Ld80::from_parts(0x3fef, 0xd00d00d0175f68be),
    Ld80::from_parts(0x3fec, 0xb8ef1d2abbc158d2),
    Ld80::from_parts(0x3fe9, 0x93f27ce47be2c122),
    Ld80::from_parts(0x3fe5, 0xd7322a5a08afb2d6),
    Ld80::from_parts(0x3fe2, 0x8f860e48fbe28667),
    Ld80::from_parts(0x3fde, 0xb0a27c05564871e2),
];

static EXP_TBL: [[Ld80; 2]; 128] = [
    [Ld80::from_parts(0x3fff, 0x8000000000000000), Ld80::from_parts(0x0000, 0x0000000000000000)],
    [Ld80::from_parts(0x3fff, 0x80b1ed4fd999a800), Ld80::from_parts(0x3fc9, 0xdb094cd5c66db9bf)],
    [Ld80::from_parts(0x3fff, 0x8164d1f3bc030800), Ld80::from_parts(0xbfc7, 0x8c841a9ad842eb21)],
    [Ld80::from_parts(0x3fff, 0x8218af4373fc2800), Ld80::from_parts(0xbfc9, 0x8518e0cbbe4b7032)],
    [Ld80::from_parts(0x3fff, 0x82cd8698ac2ba000), Ld80::from_parts(0x3fc8, 0xeb9f1523ada32906)],
    [Ld80::from_parts(0x3fff, 0x8383594eefb6f000), Ld80::from_parts(0xbfc8, 0xe48eff1589e13605)],
    [Ld80::from_parts(0x3fff, 0x843a28c3acde4000), Ld80::from_parts(0x3fc6, 0x8c35f25d9427fa2b)],
    [Ld80::from_parts(0x3fff, 0x84f1f656379c1800), Ld80::from_parts(0x3fc9, 0x8a43c0c18b09ad6f)],
    [Ld80::from_parts(0x3fff, 0x85aac367cc487800), Ld80::from_parts(0x3fc9, 0xc5317256e3085530)],
    [Ld80::from_parts(0x3fff, 0x8664915b923fb800), Ld80::from_parts(0x3fc9, 0x80f6e0b7127b8bd1)],
    [Ld80::from_parts(0x3fff, 0x871f61969e8d1000), Ld80::from_parts(0x3fc4, 0x81d0b93e2bda954b)],
    [Ld80::from_parts(0x3fff, 0x87db357ff698d800), Ld80::from_parts(0xbfc6, 0xdcdf6e2275ebd9af)],
    [Ld80::from_parts(0x3fff, 0x88980e8092da8800), Ld80::from_parts(0xbfc9, 0xb62881ca24d9ce63)],
    [Ld80::from_parts(0x3fff, 0x8955ee03618e6000), Ld80::from_parts(0xbfc5, 0x8da8a59b652e3a12)],
    [Ld80::from_parts(0x3fff, 0x8a14d575496f0000), Ld80::from_parts(0xbfc9, 0x997dfcd789b4f260)],
    [Ld80::from_parts(0x3fff, 0x8ad4c6452c728800), Ld80::from_parts(0x3fc8, 0x920355cf75584efe)],
    [Ld80::from_parts(0x3fff, 0x8b95c1e3ea8bd800), Ld80::from_parts(0xbfc8, 0x8c820dcebc53ad62)],
    [Ld80::from_parts(0x3fff, 0x8c57c9c4646f5000), Ld80::from_parts(0xbfc9, 0x88811e8cb87b5f47)],
    [Ld80::from_parts(0x3fff, 0x8d1adf5b7e5ba800), Ld80::from_parts(0x3fc8, 0xf2da63da4b4720d7)],
    [Ld80::from_parts(0x3fff, 0x8ddf042022e6a000), Ld80::from_parts(0xbfc9, 0xca9c31a977b03941)],
    [Ld80::from_parts(0x3fff, 0x8ea4398b45cd5000), Ld80::from_parts(0x3fc9, 0xf00b70051321e0f5)],
    [Ld80::from_parts(0x3fff, 0x8f6a8117e6c8e800), Ld80::from_parts(0xbfc9, 0x8efcc013ddbc5c36)],
    [Ld80::from_parts(0x3fff, 0x9031dc431466b000), Ld80::from_parts(0x3fc8, 0xee3bac0a5424a744)],
    [Ld80::from_parts(0x3fff, 0x90fa4c8beee4b000), Ld80::from_parts(0x3fc8, 0x954bf4a4a52f6d2e)],
    [Ld80::from_parts(0x3fff, 0x91c3d373ab11c000), Ld80::from_parts(0x3fc9, 0xcd83f5b6382b96b2)],
    [Ld80::from_parts(0x3fff, 0x928e727d9531f800), Ld80::from_parts(0x3fc8, 0xd60aadf7a7a52047)],
    [Ld80::from_parts(0x3fff, 0x935a2b2f13e6e800), Ld80::from_parts(0x3fc8, 0x95e99cca074ec927)],
    [Ld80::from_parts(0x3fff, 0x9426ff0fab1c0800), Ld80::from_parts(0xbfc9, 0xd261d461f86bed30)],
    [Ld80::from_parts(0x3fff, 0x94f4efa8fef70800), Ld80::from_parts(0x3fc8, 0xb097457d6892a8ef)],
    [Ld80::from_parts(0x3fff, 0x95c3fe86d6cc8000), Ld80::from_parts(0xbfc4, 0x8856e6b1c0d51def)],
    [Ld80::from_parts(0x3fff, 0x96942d3720185800), Ld80::from_parts(0x3fc9, 0x80123aa6da0ea709)],
    [Ld80::from_parts(0x3fff, 0x97657d49f17ab000), Ld80::from_parts(0x3fc7, 0x8e507a2ea91c19d8)],
    [Ld80::from_parts(0x3fff, 0x9837f0518db8a800), Ld80::from_parts(0x3fc8, 0xb7a356918c17217b)],
    [Ld80::from_parts(0x3fff, 0x990b87e266c18800), Ld80::from_parts(0x3fc8, 0xd4e73c70c023e1b7)],
    [Ld80::from_parts(0x3fff, 0x99e0459320b7f800), Ld80::from_parts(0x3fc9, 0x99390c21b2cd2d7f)],
    [Ld80::from_parts(0x3fff, 0x9ab62afc94ff8800), Ld80::from_parts(0xbfc8, 0xdae772e27231431d)],
    [Ld80::from_parts(0x3fff, 0x9b8d39b9d54e5800), Ld80::from_parts(0xbfc9, 0xb1d755fa17570cf0)],
    [Ld80::from_parts(0x3fff, 0x9c6573682ec33000), Ld80::from_parts(0xbfc9, 0xf4ac69e4c825e6f6)],
    [Ld80::from_parts(0x3fff, 0x9d3ed9a72cffb800), Ld80::from_parts(0xbfc7, 0xaf21b6b30faf1665)],
    [Ld80::from_parts(0x3fff, 0x9e196e189d472800), Ld80::from_parts(0xbfc9, 0xf7ffc1bae94e1911)],
    [Ld80::from_parts(0x3fff, 0x9ef5326091a11000), Ld80::from_parts(0x3fc8, 0xd6d0488f84f5dcff)],
    [Ld80::from_parts(0x3fff, 0x9fd228256400e000), Ld80::from_parts(0xbfc9, 0xbe811fcab7cf9a09)],
    [Ld80::from_parts(0x3fff, 0xa0b0510fb9715000), Ld80::from_parts(0xbfc5, 0xf79b48e18493c099)],
    [Ld80::from_parts(0x3fff, 0xa18faeca8544b800), Ld80::from_parts(0xbfc8, 0x8e3eef1afbccc4e0)],
    [Ld80::from_parts(0x3fff, 0xa27043030c496800), Ld80::from_parts(0x3fc4, 0xc4dbd0277c067ef5)],
    [Ld80::from_parts(0x3fff, 0xa3520f68e802b800), Ld80::from_parts(0x3fc9, 0xe4a25e8b2453b2fc)],
    [Ld80::from_parts(0x3fff, 0xa43515ae09e68000), Ld80::from_parts(0x3fc7, 0x9e0d1db4831781e2)],
    [Ld80::from_parts(0x3fff, 0xa5195786be9ef000), Ld80::from_parts(0x3fc9, 0xce5b179e8df2b0c9)],
    [Ld80::from_parts(0x3fff, 0xa5fed6a9b1513800), Ld80::from_parts(0x3fc7, 0xea1cbd7f62171070)],
    [Ld80::from_parts(0x3fff, 0xa6e594cfeee86800), Ld80::from_parts(0x3fc9, 0xc766dde353c19891)],
    [Ld80::from_parts(0x3fff, 0xa7cd93b4e9653800), Ld80::from_parts(0xbfc9, 0xa5984e92cabf1823)],
    [Ld80::from_parts(0x3fff, 0xa8b6d5167b321000), Ld80::from_parts(0xbfc8, 0xfbb42b4dec9f779c)],
    [Ld80::from_parts(0x3fff, 0xa9a15ab4ea7c1000), Ld80::from_parts(0xbfc8, 0x83d5f0ed89e56703)],
    [Ld80::from_parts(0x3fff, 0xaa8d2652ec907800), Ld80::from_parts(0xbfc8, 0xeb44e77f6f2cd663)],
    [Ld80::from_parts(0x3fff, 0xab7a39b5a93ed000), Ld80::from_parts(0x3fc9, 0xcdd96008ec9d6780)],
    [Ld80::from_parts(0x3fff, 0xac6896a4be3fe800), Ld80::from_parts(0x3fc8, 0x94af0adcd0ef3cbb)],
    [Ld80::from_parts(0x3fff, 0xad583eea42a14800), Ld80::from_parts(0x3fc9, 0xb192602a323d668c)],
    [Ld80::from_parts(0x3fff, 0xae493452ca35b800), Ld80::from_parts(0x3fc3, 0xe258dc0b4c35101f)],
    [Ld80::from_parts(0x3fff, 0xaf3b78ad690a4000), Ld80::from_parts(0x3fc9, 0xdd37c9840732ecd4)],
    [Ld80::from_parts(0x3fff, 0xb02f0dcbb6e04800), Ld80::from_parts(0xbfc9, 0x9f1214dab6f23899)],
    [Ld80::from_parts(0x3fff, 0xb123f581d2ac2800), Ld80::from_parts(0xbfc9, 0x9c1e0bf205a4b7a9)],
    [Ld80::from_parts(0x3fff, 0xb21a31a666190000), Ld80::from_parts(0xbfc8, 0xe241e3acec4996c7)],
    [Ld80::from_parts(0x3fff, 0xb311c412a9112800), Ld80::from_parts(0xbfc9, 0xddb04c3ac8e19d6c)],
    [Ld80::from_parts(0x3fff, 0xb40aaea2654b9800), Ld80::from_parts(0x3fc6, 0x81c57227b9f32707)],
    [Ld80::from_parts(0x3fff, 0xb504f333f9de6800), Ld80::from_parts(0xbfc9, 0xdee9a09d9322ad50)],
    [Ld80::from_parts(0x3fff, 0xb60093a85ed5f800), Ld80::from_parts(0xbfc7, 0x944ab33ff8586601)],
    [Ld80::from_parts(0x3fff, 0xb6fd91e328d17800), Ld80::from_parts(0xbfc6, 0xddf1d341e44557cb)],
    [Ld80::from_parts(0x3fff, 0xb7fbefca8ca42000), Ld80::from_parts(0xbfc8, 0xc1e0792c3077b100)],
    [Ld80::from_parts(0x3fff, 0xb8fbaf4762fba000), Ld80::from_parts(0xbfc8, 0x8b723c3443d4ca4d)],
    [Ld80::from_parts(0x3fff, 0xb9fcd2452c0ba000), Ld80::from_parts(0xbfc9, 0x8546cb632ea9dcfb)],
    [Ld80::from_parts(0x3fff, 0xbaff5ab2133e4800), Ld80::from_parts(0xbfc9, 0x8122cab98b6e9b1f)],
    [Ld80::from_parts(0x3fff, 0xbc034a7ef2e9f800), Ld80::from_parts(0x3fc9, 0xc335c05010b16576)],
    [Ld80::from_parts(0x3fff, 0xbd08a39f580c3800), Ld80::from_parts(0xbfc8, 0xa0abbf7024c97828)],
    [Ld80::from_parts(0x3fff, 0xbe0f680986099000), Ld80::from_parts(0x3fc9, 0xf8926688b26eac56)],
    [Ld80::from_parts(0x3fff, 0xbf1799b67a731000), Ld80::from_parts(0x3fc7, 0x82e815d0abcbf0b8)],
    [Ld80::from_parts(0x3fff, 0xc0213aa1f0d09000), Ld80::from_parts(0xbfc9, 0x93e433136cb9562b)],
    [Ld80::from_parts(0x3fff, 0xc12c4cca66709800), Ld80::from_parts(0xbfc9, 0xea60eea0a996bfde)],
    [Ld80::from_parts(0x3fff, 0xc238d2311e3d6800), Ld80::from_parts(0xbfc8, 0xc6b4251a0e6fdab2)],
    [Ld80::from_parts(0x3fff, 0xc346ccda24976800), Ld80::from_parts(0xbfc9, 0xfe37c4dea7b5d1f1)],
    [Ld80::from_parts(0x3fff, 0xc4563ecc5334c800), Ld80::from_parts(0x3fc9, 0xcca6179be5a9d3ac)],
    [Ld80::from_parts(0x3fff, 0xc5672a115506d800), Ld80::from_parts(0x3fc9, 0xb74f8ab432593768)],
    [Ld80::from_parts(0x3fff, 0xc67990b5aa246000), Ld80::from_parts(0xbfc7, 0x86aaf1974f1d513e)],
    [Ld80::from_parts(0x3fff, 0xc78d74c8abb9b000), Ld80::from_parts(0x3fc8, 0xae609d171cbb6014)],
    [Ld80::from_parts(0x3fff, 0xc8a2d85c8ffe3000), Ld80::from_parts(0xbfc9, 0xeeb3c972c1291e40)],
    [Ld80::from_parts(0x3fff, 0xc9b9bd866e2f2800), Ld80::from_parts(0xbfc6, 0xbafe3c0dabf5dd2d)],
    [Ld80::from_parts(0x3fff, 0xcad2265e42907800), Ld80::from_parts(0xbfc7, 0xb25be4b52f81c842)],
    [Ld80::from_parts(0x3fff, 0xcbec14fef2728000), Ld80::from_parts(0xbfc9, 0xe8c2dbe0dc2e8502)],
    [Ld80::from_parts(0x3fff, 0xcd078b86503dd000), Ld80::from_parts(0xbfc9, 0x8b9dec8e77319083)],
    [Ld80::from_parts(0x3fff, 0xce248c151f848000), Ld80::from_parts(0x3fc7, 0xe3e235838f95f2c7)],
    [Ld80::from_parts(0x3fff, 0xcf4318cf19191800), Ld80::from_parts(0x3fc7, 0xc12653c732637008)],
    [Ld80::from_parts(0x3fff, 0xd06333daef2b2800), Ld80::from_parts(0xbfc9, 0x9aca4ae8e6a996cb)],
    [Ld80::from_parts(0x3fff, 0xd184df6251699800), Ld80::from_parts(0x3fc9, 0xb182e3eee1b55aa9)],
    [Ld80::from_parts(0x3fff, 0xd2a81d91f12ae800), Ld80::from_parts(0xbfc9, 0xe97b76dc6a0f0870)],
    [Ld80::from_parts(0x3fff, 0xd3ccf099859ac000), Ld80::from_parts(0x3fc9, 0xde5bf6562b1e3531)],
    [Ld80::from_parts(0x3fff, 0xd4f35aabcfedf800), Ld80::from_parts(0x3fc9, 0x87d64877bfe9898b)],
    [Ld80::from_parts(0x3fff, 0xd61b5dfe9f9bd000), Ld80::from_parts(0xbfc8, 0xfc91a6573b6680e3)],
    [Ld80::from_parts(0x3fff, 0xd744fccad69d6800), Ld80::from_parts(0x3fc9, 0xbd0e69a2ee640b50)],
    [Ld80::from_parts(0x3fff, 0xd870394c6db33000), Ld80::from_parts(0xbfc9, 0xdef7aa64072126be)],
    [Ld80::from_parts(0x3fff, 0xd99d15c278afd800), Ld80::from_parts(0xbfc6, 0x9402f18426b83da9)],
    [Ld80::from_parts(0x3fff, 0xdacb946f2ac9d000), Ld80::from_parts(0xbfc9, 0xe38efdddd36f1872)],
    [Ld80::from_parts(0x3fff, 0xdbfbb797daf23800), Ld80::from_parts(0xbfc7, 0xaac27bf2a561d656)],
    [Ld80::from_parts(0x3fff, 0xdd2d818508325000), Ld80::from_parts(0xbfc9, 0xf7e69872a149701b)],
    [Ld80::from_parts(0x3fff, 0xde60f4825e0e9000), Ld80::from_parts(0x3fc8, 0x91ee83d16cf42334)],
    [Ld80::from_parts(0x3fff, 0xdf9612deb8f04800), Ld80::from_parts(0xbfc9, 0xf7ee51fb5ce3976c)],
    [Ld80::from_parts(0x3fff, 0xe0ccdeec2a94e000), Ld80::from_parts(0x3fc8, 0x88832c4a8246e99a)],
    [Ld80::from_parts(0x3fff, 0xe2055afffe83d000), Ld80::from_parts(0x3fc9, 0xda29bf041e30514a)],
    [Ld80::from_parts(0x3fff, 0xe33f8972be8a5800), Ld80::from_parts(0x3fc9, 0x94426ffa41e56604)],
    [Ld80::from_parts(0x3fff, 0xe47b6ca0373da800), Ld80::from_parts(0x3fc7, 0x8d65e24402e2216f)],
    [Ld80::from_parts(0x3fff, 0xe5b906e77c834800), Ld80::from_parts(0x3fc7, 0xa81e5e8f4a4edbb1)],
    [Ld80::from_parts(0x3fff, 0xe6f85aaaee1fd000), Ld80::from_parts(0xbfc8, 0xeec1da9c14eb906c)],
    [Ld80::from_parts(0x3fff, 0xe8396a503c4be000), Ld80::from_parts(0xbfc9, 0xe5e1ba1bcbd4e3ce)],
    [Ld80::from_parts(0x3fff, 0xe97c38406c4f9000), Ld80::from_parts(0xbfc9, 0xea43db8cec2bbfb5)],
    [Ld80::from_parts(0x3fff, 0xeac0c6e7dd243800), Ld80::from_parts(0x3fc8, 0x976816bad9b8372a)],
    [Ld80::from_parts(0x3fff, 0xec0718b64c1cc000), Ld80::from_parts(0xbfc9, 0x88f60c5f6eff40f7)],
    [Ld80::from_parts(0x3fff, 0xed4f301ed9942800), Ld80::from_parts(0x3fc9, 0xe118034b6da992ff)],
    [Ld80::from_parts(0x3fff, 0xee990f980da30000), Ld80::from_parts(0x3fc9, 0x96d2bbc780c61472)],
    [Ld80::from_parts(0x3fff, 0xefe4b99bdcdaf800), Ld80::from_parts(0xbfc9, 0x8d2e6a78c25adc92)],
    [Ld80::from_parts(0x3fff, 0xf13230a7ad094800), Ld80::from_parts(0xbfc9, 0xbdb13c0bd0a4b373)],
    [Ld80::from_parts(0x3fff, 0xf281773c59ffb000), Ld80::from_parts(0x3fc8, 0x9cf44c054e647a3d)],
    [Ld80::from_parts(0x3fff, 0xf3d28fde3a641800), Ld80::from_parts(0x3fc9, 0x96a91650646f0ceb)],
    [Ld80::from_parts(0x3fff, 0xf5257d152486d000), Ld80::from_parts(0xbfc9, 0xf4e118bce14499fc)],
    [Ld80::from_parts(0x3fff, 0xf67a416c733f8800), Ld80::from_parts(0xbfc9, 0xe49f9da08d6c6217)],
    [Ld80::from_parts(0x3fff, 0xf7d0df730ad13800), Ld80::from_parts(0x3fc9, 0xee3fa43525b583ee)],
    [Ld80::from_parts(0x3fff, 0xf92959bb5dd4b800), Ld80::from_parts(0x3fc9, 0x9d0d2df86c721a99)],
    [Ld80::from_parts(0x3fff, 0xfa83b2db722a0000), Ld80::from_parts(0x3fc9, 0xce9f096ec50c5760)],
    [Ld80::from_parts(0x3fff, 0xfbdfed6ce5f0a000), Ld80::from_parts(0xbfc9, 0xedd8968031a84d47)],
    [Ld80::from_parts(0x3fff, 0xfd3e0c0cf486c000), Ld80::from_parts(0x3fc8, 0xba429f9d2c98f077)],
    [Ld80::from_parts(0x3fff, 0xfe9e115c7b8f8800), Ld80::from_parts(0x3fc6, 0x975ba4b32bcf3a5e)],
];

static STIRLING: [Ld80; 10] = [
    Ld80::from_parts(0x3ffb, 0xaaaaaaaaaaaaaaaa),
    Ld80::from_parts(0xbff6, 0xb60b60b60b5fb818),
    Ld80::from_parts(0x3ff4, 0xd00d00cffa77ac7b),
    Ld80::from_parts(0xbff4, 0x9c09c07a4110e51e),
    Ld80::from_parts(0x3ff4, 0xdca8d1d7edca95ce),
    Ld80::from_parts(0xbff5, 0xfb4d00396fda5aa2),
    Ld80::from_parts(0x3ff7, 0xd15659eacda765ab),
    Ld80::from_parts(0xbff9, 0xe854240506dcfa6b),
    Ld80::from_parts(0x3ffc, 0x8d55a577d6b13704),
    Ld80::from_parts(0xbffd, 0xef44f5e2a2ca4d13),
];

static RATFUN_P: [Ld80; 7] = [
    Ld80::from_parts(0x3ffd, 0xdb629fb9bbdc1aec),
    Ld80::from_parts(0x4007, 0xaea3221f1c825918),
    Ld80::from_parts(0x4005, 0x8abe0a988ef3b1fe),
    Ld80::from_parts(0xc003, 0xf04ce4d7b6593933),
    Ld80::from_parts(0x3ffd, 0x8d89eb6a534a73fa),
    Ld80::from_parts(0x3fff, 0x93e2771ea0dd3f95),
    Ld80::from_parts(0xbffd, 0x9a76243afa676639),
];

static RATFUN_Q: [Ld80; 11] = [
    Ld80::from_parts(0x3fff, 0x8000000000000000),
    Ld80::from_parts(0x4008, 0xcbdc24e6a341dafa),
    Ld80::from_parts(0x4007, 0xcd21795e6526a320),
    Ld80::from_parts(0xc006, 0xfaed6c7fe79e3bcf),
    Ld80::from_parts(0xc004, 0xd9fe0a4e082c9f91),
    Ld80::from_parts(0x4004, 0x8e6479709a5fa1a1),
    Ld80::from_parts(0xbfff, 0x970d61d8b2e8993d),
    Ld80::from_parts(0xbfff, 0xcbbcc744d56a8485),
    Ld80::from_parts(0x3ffd, 0x8bc1215c270383ba),
    Ld80::from_parts(0xbff8, 0x840e9ffd41d86d68),
    Ld80::from_parts(0xbff4, 0xed93ed5b87df3d97),
];

static LOG_HEAD: [Ld80; 129] = [
    Ld80::from_parts(0x0000, 0x0000000000000000),
    Ld80::from_parts(0x3ff7, 0xff01535883400000),
    Ld80::from_parts(0x3ff8, 0xfe054587e0200000),
    Ld80::from_parts(0x3ff9, 0xbdc8d83ead880000),
    Ld80::from_parts(0x3ff9, 0xfc14d873c1980000),
    Ld80::from_parts(0x3ffa, 0x9cf43dcff5ea0000),
    Ld80::from_parts(0x3ffa, 0xbba2c7b196e80000),
    Ld80::from_parts(0x3ffa, 0xda16eb88cb8e0000),
    Ld80::from_parts(0x3ffa, 0xf85186008b160000),
    Ld80::from_parts(0x3ffb, 0x8b29b7751bd70000),
    Ld80::from_parts(0x3ffb, 0x9a0ebcb0de8f0000),
    Ld80::from_parts(0x3ffb, 0xa8d839f830c20000),
    Ld80::from_parts(0x3ffb, 0xb78694572b5a0000),
    Ld80::from_parts(0x3ffb, 0xc61a2eb18cd90000),
    Ld80::from_parts(0x3ffb, 0xd49369d256ab0000),
    Ld80::from_parts(0x3ffb, 0xe2f2a47ade3a0000),
    Ld80::from_parts(0x3ffb, 0xf1383b7157970000),
    Ld80::from_parts(0x3ffb, 0xff64898edf560000),
    Ld80::from_parts(0x3ffc, 0x86bbf3e684730000),
    Ld80::from_parts(0x3ffc, 0x8db956a97b3d0000),
    Ld80::from_parts(0x3ffc, 0x94aa97c0ffa90000),
    Ld80::from_parts(0x3ffc, 0x9b8fe100f47b8000),
    Ld80::from_parts(0x3ffc, 0xa2695b665be90000),
    Ld80::from_parts(0x3ffc, 0xa9372f1d0da18000),
    Ld80::from_parts(0x3ffc, 0xaff983853c9e8000),
    Ld80::from_parts(0x3ffc, 0xb6b07f38ce910000),
    Ld80::from_parts(0x3ffc, 0xbd5c481086c88000),
    Ld80::from_parts(0x3ffc, 0xc3fd032906488000),
    Ld80::from_parts(0x3ffc, 0xca92d4e7a2b58000),
    Ld80::from_parts(0x3ffc, 0xd11de0ff15ab0000),
    Ld80::from_parts(0x3ffc, 0xd79e4a7405ff8000),
    Ld80::from_parts(0x3ffc, 0xde1433a16c668000),
    Ld80::from_parts(0x3ffc, 0xe47fbe3cd4d10000),
    Ld80::from_parts(0x3ffc, 0xeae10b5a7ddc8000),
    Ld80::from_parts(0x3ffc, 0xf1383b7157970000),
    Ld80::from_parts(0x3ffc, 0xf7856e5ee2c98000),
    Ld80::from_parts(0x3ffc, 0xfdc8c36af1f18000),
    Ld80::from_parts(0x3ffd, 0x82012ca5a6820000),
    Ld80::from_parts(0x3ffd, 0x851927139c870000),
    Ld80::from_parts(0x3ffd, 0x882c5fcd7256c000),
    Ld80::from_parts(0x3ffd, 0x8b3ae55d5d308000),
    Ld80::from_parts(0x3ffd, 0x8e44c60b4ccfc000),
    Ld80::from_parts(0x3ffd, 0x914a0fde7bcb4000),
    Ld80::from_parts(0x3ffd, 0x944ad09ef4350000),
    Ld80::from_parts(0x3ffd, 0x974715d708e98000),
    Ld80::from_parts(0x3ffd, 0x9a3eecd4c3eac000),
    Ld80::from_parts(0x3ffd, 0x9d3262ab4a2f4000),
    Ld80::from_parts(0x3ffd, 0xa0218434353f0000),
    Ld80::from_parts(0x3ffd, 0xa30c5e10e2f60000),
    Ld80::from_parts(0x3ffd, 0xa5f2fcabbbc50000),
    Ld80::from_parts(0x3ffd, 0xa8d56c396fc18000),
    Ld80::from_parts(0x3ffd, 0xabb3b8ba2ad38000),
    Ld80::from_parts(0x3ffd, 0xae8dedfac04e4000),
    Ld80::from_parts(0x3ffd, 0xb1641795ce3cc000),
    Ld80::from_parts(0x3ffd, 0xb43640f4d8a58000),
    Ld80::from_parts(0x3ffd, 0xb70475515d0f0000),
    Ld80::from_parts(0x3ffd, 0xb9cebfb5de804000),
    Ld80::from_parts(0x3ffd, 0xbc952afeea3d0000),
    Ld80::from_parts(0x3ffd, 0xbf57c1dc157e0000),
    Ld80::from_parts(0x3ffd, 0xc2168ed0f458c000),
    Ld80::from_parts(0x3ffd, 0xc4d19c360a12c000),
    Ld80::from_parts(0x3ffd, 0xc788f439b3164000),
    Ld80::from_parts(0x3ffd, 0xca3ca0e108b7c000),
    Ld80::from_parts(0x3ffd, 0xccecac08bf044000),
    Ld80::from_parts(0x3ffd, 0xcf991f65fcc24000),
    Ld80::from_parts(0x3ffd, 0xd24204872dd84000),
    Ld80::from_parts(0x3ffd, 0xd4e764d4d0424000),
    Ld80::from_parts(0x3ffd, 0xd78949923bc34000),
    Ld80::from_parts(0x3ffd, 0xda27bbde647b0000),
    Ld80::from_parts(0x3ffd, 0xdcc2c4b49887c000),
    Ld80::from_parts(0x3ffd, 0xdf5a6ced38dbc000),
    Ld80::from_parts(0x3ffd, 0xe1eebd3e6d6a8000),
    Ld80::from_parts(0x3ffd, 0xe47fbe3cd4d10000),
    Ld80::from_parts(0x3ffd, 0xe70d785c2f9f4000),
    Ld80::from_parts(0x3ffd, 0xe997f3f0075ec000),
    Ld80::from_parts(0x3ffd, 0xec1f392c517a0000),
    Ld80::from_parts(0x3ffd, 0xeea350260e250000),
    Ld80::from_parts(0x3ffd, 0xf12440d3e3614000),
    Ld80::from_parts(0x3ffd, 0xf3a2130eb43c4000),
    Ld80::from_parts(0x3ffd, 0xf61cce9234660000),
    Ld80::from_parts(0x3ffd, 0xf8947afd78378000),
    Ld80::from_parts(0x3ffd, 0xfb091fd381458000),
    Ld80::from_parts(0x3ffd, 0xfd7ac47bc7990000),
    Ld80::from_parts(0x3ffd, 0xffe97042bfa4c000),
    Ld80::from_parts(0x3ffe, 0x812a952d2e880000),
    Ld80::from_parts(0x3ffe, 0x825efced4936a000),
    Ld80::from_parts(0x3ffe, 0x8391f2e0e6fa0000),
    Ld80::from_parts(0x3ffe, 0x84c37a7ab9a90000),
    Ld80::from_parts(0x3ffe, 0x85f3972129542000),
    Ld80::from_parts(0x3ffe, 0x87224c2e8e646000),
    Ld80::from_parts(0x3ffe, 0x884f9cf16a64c000),
    Ld80::from_parts(0x3ffe, 0x897b8cac9f7de000),
    Ld80::from_parts(0x3ffe, 0x8aa61e97a6af4000),
    Ld80::from_parts(0x3ffe, 0x8bcf55dec4cd0000),
    Ld80::from_parts(0x3ffe, 0x8cf735a33e4b8000),
    Ld80::from_parts(0x3ffe, 0x8e1dc0fb89e12000),
    Ld80::from_parts(0x3ffe, 0x8f42faf382068000),
    Ld80::from_parts(0x3ffe, 0x9066e68c955b6000),
    Ld80::from_parts(0x3ffe, 0x918986bdf5fa2000),
    Ld80::from_parts(0x3ffe, 0x92aade74c7be6000),
    Ld80::from_parts(0x3ffe, 0x93caf0944d88e000),
    Ld80::from_parts(0x3ffe, 0x94e9bff615846000),
    Ld80::from_parts(0x3ffe, 0x96074f6a24746000),
    Ld80::from_parts(0x3ffe, 0x9723a1b720134000),
    Ld80::from_parts(0x3ffe, 0x983eb99a78860000),
    Ld80::from_parts(0x3ffe, 0x995899c890eb8000),
    Ld80::from_parts(0x3ffe, 0x9a7144ece70ea000),
    Ld80::from_parts(0x3ffe, 0x9b88bdaa3a3da000),
    Ld80::from_parts(0x3ffe, 0x9c9f069ab150c000),
    Ld80::from_parts(0x3ffe, 0x9db4224fffe12000),
    Ld80::from_parts(0x3ffe, 0x9ec813538ab7e000),
    Ld80::from_parts(0x3ffe, 0x9fdadc268b7a2000),
    Ld80::from_parts(0x3ffe, 0xa0ec7f4233958000),
    Ld80::from_parts(0x3ffe, 0xa1fcff17ce734000),
    Ld80::from_parts(0x3ffe, 0xa30c5e10e2f62000),
    Ld80::from_parts(0x3ffe, 0xa41a9e8f54470000),
    Ld80::from_parts(0x3ffe, 0xa527c2ed81f5e000),
    Ld80::from_parts(0x3ffe, 0xa633cd7e6771c000),
    Ld80::from_parts(0x3ffe, 0xa73ec08dbadd8000),
    Ld80::from_parts(0x3ffe, 0xa8489e600b436000),
    Ld80::from_parts(0x3ffe, 0xa9516932de2d6000),
    Ld80::from_parts(0x3ffe, 0xaa59233ccca4c000),
    Ld80::from_parts(0x3ffe, 0xab5fcead9f9cc000),
    Ld80::from_parts(0x3ffe, 0xac656dae6bcc4000),
    Ld80::from_parts(0x3ffe, 0xad6a0261acf96000),
    Ld80::from_parts(0x3ffe, 0xae6d8ee360bb2000),
    Ld80::from_parts(0x3ffe, 0xaf70154920b3a000),
    Ld80::from_parts(0x3ffe, 0xb07197a23c46c000),
    Ld80::from_parts(0x3ffe, 0xb17217f7d1cf8000),
];

static LOG_TAIL: [Ld80; 129] = [
    Ld80::from_parts(0x0000, 0x0000000000000000),
    Ld80::from_parts(0xbfc9, 0xee07912df8dc47b0),
    Ld80::from_parts(0xbfc8, 0xe183092c59642a15),
    Ld80::from_parts(0x3fc9, 0xd5493faa638b5e01),
    Ld80::from_parts(0x3fc3, 0x99f1f8278f7914fd),
    Ld80::from_parts(0x3fca, 0xfd480ad90155c8a7),
    Ld80::from_parts(0xbfc7, 0xee72c357846d69f5),
    Ld80::from_parts(0xbfc6, 0x9eb9759c13049917),
    Ld80::from_parts(0xbfca, 0xccf419b47488a668),
    Ld80::from_parts(0x3fc6, 0xe8625c173dd325e4),
    Ld80::from_parts(0xbfca, 0xf6d667c89efb2ec9),
    Ld80::from_parts(0xbfc6, 0x96d8719795d06ea8),
    Ld80::from_parts(0x3fca, 0xb9be499b9ed19b64),
    Ld80::from_parts(0x3fc6, 0xf5acb42a65edab43),
    Ld80::from_parts(0x3fc8, 0xd942f48aa70ea932),
    Ld80::from_parts(0x3fc8, 0xc57585fbe0586c5e),
    Ld80::from_parts(0x3fc9, 0xbd3d50fffc3fd3c3),
    Ld80::from_parts(0xbfc9, 0xaaba35ccc0d9b639),
    Ld80::from_parts(0xbfca, 0xd32d11d0b7e7aa2e),
    Ld80::from_parts(0x3fc5, 0xa41811a3966b9cfd),
    Ld80::from_parts(0x3fc9, 0xd301771c407dbe9a),
    Ld80::from_parts(0x3fca, 0x8779b2d8abc627f3),
    Ld80::from_parts(0xbfc8, 0xcc16135783c0f0fa),
    Ld80::from_parts(0x3fca, 0xf45c803adc796335),
    Ld80::from_parts(0x3fc9, 0xf21cf88281c848ef),
    Ld80::from_parts(0xbfc9, 0xdcaae268ecd1790e),
    Ld80::from_parts(0xbfca, 0xdc83929a52bf3eff),
    Ld80::from_parts(0x3fc7, 0x902009017dc9977b),
    Ld80::from_parts(0x3fca, 0x8ec8260ea71712cf),
    Ld80::from_parts(0x3fc9, 0xc64dc46c1ea6630a),
    Ld80::from_parts(0x3fc9, 0xb63398064df33d73),
    Ld80::from_parts(0x3fca, 0xc53f39d121c3d53c),
    Ld80::from_parts(0x3fc8, 0xd612ec0f797fdcd1),
    Ld80::from_parts(0x3fc8, 0xadc886b2fc9a8038),
    Ld80::from_parts(0x3fca, 0xbd3d50fffc3fd3c3),
    Ld80::from_parts(0x3fca, 0xca431bca86e10643),
    Ld80::from_parts(0xbfca, 0xae555732790d65a7),
    Ld80::from_parts(0x3fc8, 0xdae27bd0b5fba579),
    Ld80::from_parts(0x3fca, 0xd7dcfde8061c030e),
    Ld80::from_parts(0xbfca, 0xb9d817d52cd338c2),
    Ld80::from_parts(0xbfc9, 0xfe319c15477c8e90),
    Ld80::from_parts(0x3fca, 0xbef1a39d500e3bbc),
    Ld80::from_parts(0xbfca, 0x976f5eb09628af34),
    Ld80::from_parts(0x3fca, 0xd7ad24c13f040e59),
    Ld80::from_parts(0x3fc8, 0x9c2cc91a85081b3d),
    Ld80::from_parts(0xbfca, 0xca6ea62c048cfbc2),
    Ld80::from_parts(0x3fc9, 0xe3979ae6ba068470),
    Ld80::from_parts(0x3fca, 0xef43049f7d319298),
    Ld80::from_parts(0x3fca, 0x9f42decdeccf1cd1),
    Ld80::from_parts(0x3fc8, 0xdb4c9949f6fd8648),
    Ld80::from_parts(0xbfca, 0xbd8db0a7cc15439e),
    Ld80::from_parts(0xbfca, 0xead9524d7c99f430),
    Ld80::from_parts(0x3fca, 0x94236383dc7fe116),
    Ld80::from_parts(0xbfca, 0xb4242837567f8d74),
    Ld80::from_parts(0xbfc9, 0x9ddea0f7f58e3cb5),
    Ld80::from_parts(0x3fca, 0xe304e4c635c5f0bc),
    Ld80::from_parts(0xbfc9, 0xb18ed9d602960843),
    Ld80::from_parts(0x3fca, 0x9f057691fe9ed681),
    Ld80::from_parts(0x3fca, 0xd92ce979ed295043),
    Ld80::from_parts(0xbfc8, 0xb6c4eb9a1ee6265e),
    Ld80::from_parts(0x3fca, 0xad69c620440f055b),
    Ld80::from_parts(0xbfc8, 0x81e8962a9679759a),
    Ld80::from_parts(0x3fca, 0xae9337451f441bac),
    Ld80::from_parts(0x3fca, 0xb2ea4bbb11e0c6fe),
    Ld80::from_parts(0x3fca, 0xfcada35d9bd01488),
    Ld80::from_parts(0x3fca, 0x8aff29adc3ad3a4b),
    Ld80::from_parts(0x3fc9, 0xc6a427fa9792a1af),
    Ld80::from_parts(0x3fca, 0xc44ce11285770a03),
    Ld80::from_parts(0x3fca, 0xa32fbb6aba63878f),
    Ld80::from_parts(0x3fca, 0xd663ec53e23bc39f),
    Ld80::from_parts(0x3fca, 0xfde1874deaef06b2),
    Ld80::from_parts(0xbfca, 0xa3130fad2159649f),
    Ld80::from_parts(0x3fc9, 0xd612ec0f797fdcd1),
    Ld80::from_parts(0x3fca, 0xdedf4af2ab42674a),
    Ld80::from_parts(0xbfca, 0xa7884dcd0505c903),
    Ld80::from_parts(0xbfc9, 0xd7d7522e89b5dde3),
    Ld80::from_parts(0x3fc8, 0xbee626a49d1db880),
    Ld80::from_parts(0xbfc9, 0xf1a1385d355adce5),
    Ld80::from_parts(0xbfc5, 0xe412e4861a25c898),
    Ld80::from_parts(0x3fc5, 0xbae7729f9a9cb7f6),
    Ld80::from_parts(0xbfca, 0xd328df13bb38c28a),
    Ld80::from_parts(0xbfca, 0xe7aea4f0d24cbeb8),
    Ld80::from_parts(0xbfc9, 0x9328260d8abca027),
    Ld80::from_parts(0x3fc7, 0xab2fa06c990d7923),
    Ld80::from_parts(0xbfca, 0x9cb1cb51408c001d),
    Ld80::from_parts(0xbfca, 0xcd019f7fba6c412b),
    Ld80::from_parts(0x3fc8, 0x9caf2c71222dd56d),
    Ld80::from_parts(0x3fc9, 0xb91fda94ff43fc07),
    Ld80::from_parts(0xbfca, 0xa4b3b42266100196),
    Ld80::from_parts(0xbfc5, 0x9151a216969c1cb8),
    Ld80::from_parts(0xbfca, 0x810e09b27a4373a1),
    Ld80::from_parts(0x3fc8, 0xa60246338fa1a969),
    Ld80::from_parts(0x3fca, 0xd4c799d1cb2f1405),
    Ld80::from_parts(0x3fc9, 0xbfc60e6fa07d2e1b),
    Ld80::from_parts(0xbfca, 0x99d1a11443f10c2b),
    Ld80::from_parts(0x3fc9, 0xbc94f8ecdfbc5df9),
    Ld80::from_parts(0x3fc7, 0xf7b16697cf8f1af9),
    Ld80::from_parts(0x3fca, 0xc9a81e87badfd84a),
    Ld80::from_parts(0xbfca, 0xbe90e4bc6e9adbf6),
    Ld80::from_parts(0xbfc9, 0xc3fbc5252efc31df),
    Ld80::from_parts(0xbfca, 0x8a43e061234bc700),
    Ld80::from_parts(0xbfca, 0x9bd1949a2d19824a),
    Ld80::from_parts(0xbfc8, 0x8d0ac79c8bac33b5),
    Ld80::from_parts(0x3fc8, 0x80a8430d24435625),
    Ld80::from_parts(0xbfca, 0xf02537af054c9321),
    Ld80::from_parts(0x3fca, 0x9902ab5b3d916b06),
    Ld80::from_parts(0xbfc9, 0xe9146d277a31b152),
    Ld80::from_parts(0x3fca, 0xe2ee8124226efc90),
    Ld80::from_parts(0x3fca, 0xd4e221301b6f8c39),
    Ld80::from_parts(0xbfca, 0xa838909f3d364cbe),
    Ld80::from_parts(0xbfca, 0xadfdece17a96c309),
    Ld80::from_parts(0xbfca, 0xd258b157d1aa2219),
    Ld80::from_parts(0xbfca, 0xcdcda19e85cff443),
    Ld80::from_parts(0xbfc9, 0x858d84649f11e692),
    Ld80::from_parts(0xbfca, 0xc17a42642661c65e),
    Ld80::from_parts(0xbfc9, 0x8c2a1744cfe02f6a),
    Ld80::from_parts(0xbfc9, 0xfdd840b85913c93a),
    Ld80::from_parts(0x3fca, 0xd8b4766e98c37ec3),
    Ld80::from_parts(0x3fc9, 0x9cb0985645855dc3),
    Ld80::from_parts(0xbfc9, 0xb434c5a4f4a93c26),
    Ld80::from_parts(0xbfca, 0x88c41ba875268516),
    Ld80::from_parts(0xbfc8, 0xadd57ae9784fa1a6),
    Ld80::from_parts(0x3fca, 0xa08e310b9b1fe59d),
    Ld80::from_parts(0x3fca, 0x9849792ec9845855),
    Ld80::from_parts(0x3fc9, 0xfb29aaa5f0239a81),
    Ld80::from_parts(0x3fc9, 0x8cf6e3c5d708315f),
    Ld80::from_parts(0x3fca, 0xb86b04afe92103ef),
    Ld80::from_parts(0x3fc9, 0xca7c895a0b4ecaa8),
    Ld80::from_parts(0xbfc9, 0xca86c3898cff81a1),
];

static LOG_SERIES: [Ld80; 4] = [
    Ld80::from_parts(0x3ffb, 0xaaaaaaaaaaaaaaab),
    Ld80::from_parts(0x3ff8, 0xcccccccccccccccd),
    Ld80::from_parts(0x3ff6, 0x9249249249249249),
    Ld80::from_parts(0x3ff3, 0xe38e38e38e38e38e),
];

pub(super) static CONSTS: LdConsts<Ld80> = LdConsts {
    invpio2: Ld80::from_parts(0x3ffe, 0xa2f9836e4e44152a),
    pio2_1: Ld80::from_parts(0x3fff, 0xc90fdaa222000000),
    pio2_1t: Ld80::from_parts(0xbfd7, 0x973dcb3b399d747f),
    pio2_2: Ld80::from_parts(0xbfd7, 0x973dcb3b3a000000),
    pio2_2t: Ld80::from_parts(0x3fae, 0xc51701b839a25205),
    pio2_3: Ld80::from_parts(0x3fae, 0xc51701b83a000000),
    pio2_3t: Ld80::from_parts(0xbf85, 0xbb5bf6c7ddd660ce),
    medium_limit: Ld80::from_parts(0x4018, 0xc90fdaa22168c235),
    round2: 22,
    round3: 61,
    chunks: 3,
    large_prec: 2,
    pio4: Ld80::from_parts(0x3ffe, 0xc90fdaa22168c235),
    pio4_lo: Ld80::from_parts(0xbfbc, 0xece675d1fc8f8cbb),
    tan_reflect: Ld80::from_parts(0x3ffe, 0xaca57a786c22680a),
    sin: &SIN,
    cos: &COS,
    tan: &TAN,
    pi_hi: Ld80::from_parts(0x4000, 0xc90fdaa221000000),
    pi_lo: Ld80::from_parts(0x3fd7, 0xd18469898cc51702),
    inv_l: Ld80::from_parts(0x4006, 0xb8aa3b295c17f0bc),
    l1: Ld80::from_parts(0x3ff7, 0xb17217f7d2000000),
    l2: Ld80::from_parts(0xbfcd, 0xc21950d871319ff0),
    exp_poly: &EXP_POLY,
    exp_tbl: &EXP_TBL,
    o_threshold: Ld80::from_parts(0x400c, 0xb17217f7d1cf79ab),
    u_threshold: Ld80::from_parts(0xc00c, 0xb21dfe7f09e2baaa),
    expm1_poly: &EXPM1_POLY,
    expm1_bound: Ld80::from_parts(0x3ffc, 0xa9e1b089a0275254),
};

pub(super) static GAMMA: GammaConsts<Ld80> = GammaConsts {
    stirling: &STIRLING,
    ratfun_p: &RATFUN_P,
    ratfun_q: &RATFUN_Q,
    log_head: &LOG_HEAD,
    log_tail: &LOG_TAIL,
    log_series: &LOG_SERIES,
    // 2^12 + 1: its ulp, 2^-51, is the grid LOG_HEAD is stored on
    log_round: Ld80::from_parts(0x400b, 0x8008000000000000),
    x0: Ld80::from_parts(0x3ffd, 0xec5b0c6ad7c7edc3),
    a0_hi: Ld80::from_parts(0x3ffe, 0xe2b6e4153a57746c),
    a0_lo: Ld80::from_parts(0x3fbd, 0x851566d40f32c76d),
    left: Ld80::from_parts(0xbffd, 0xca80000000000000),
    lns2pi_hi: Ld80::from_parts(0x3ffd, 0xd680000000000000),
    lns2pi_lo: Ld80::from_parts(0xbfed, 0xe379b414b596d687),
    xmax: Ld80::from_parts(0x4009, 0xdb718c066b352e21),
    iota: Ld80::from_parts(0x3fbb, 0x8000000000000000),
    pi: Ld80::from_parts(0x4000, 0xc90fdaa22168c235),
    tiny: Ld80::from_parts(0x18ef, 0x8000000000000000),
    neg_log_limit: Ld80::from_parts(0xc009, 0xdb40000000000000),
    neg_underflow: Ld80::from_parts(0xc009, 0xe100000000000000),
};
