//! Subcycle jump tables
//!
//! A subcycle recurrence such as `x = rotl(x * 0xACED, 28)` splits the
//! non-zero words into several disjoint cycles. Only the longest one is worth
//! seeding into, and reaching an arbitrary point of it from a known start
//! would take up to ~2^32 steps.
//!
//! Each table stores 128 points of the long cycle, `STRIDE` (512) steps
//! apart, recorded offline by iterating the same [`Recurrence`] the
//! generator uses. A 32-bit seed picks a table entry with 7 bits and walks
//! forward 0..=511 steps with 9 more bits, so seeding one half costs at most
//! 511 elementary steps and always lands on the long cycle.
//!
//! Changing a recurrence invalidates its table; `rngtool verify` and the
//! `test_jump_table` suite rebuild every table and compare.

use crate::rng::family::Family;
use crate::rng::transition::{AddRotate, MultiplyRotate, Recurrence};

/// Number of entries per table.
pub const TABLE_LEN: usize = 128;

/// Recurrence steps between consecutive entries.
pub const STRIDE: u32 = 512;

/// A precomputed table plus the seed bit-fields that address it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTable {
    entries: [u32; TABLE_LEN],
    /// Seed bits `index_shift..index_shift + 7` select the entry.
    index_shift: u32,
    /// Seed bits `offset_shift..offset_shift + 9` give the walk length.
    offset_shift: u32,
}

impl JumpTable {
    pub const fn new(entries: [u32; TABLE_LEN], index_shift: u32, offset_shift: u32) -> Self {
        Self {
            entries,
            index_shift,
            offset_shift,
        }
    }

    pub fn entries(&self) -> &[u32; TABLE_LEN] {
        &self.entries
    }

    /// Entry `index`, wrapping past the end of the table.
    pub fn entry(&self, index: usize) -> u32 {
        self.entries[index % TABLE_LEN]
    }

    pub fn index_of(&self, seed: u32) -> usize {
        ((seed >> self.index_shift) & 0x7F) as usize
    }

    pub fn offset_of(&self, seed: u32) -> u32 {
        (seed >> self.offset_shift) & 0x1FF
    }

    /// Seed one half: jump to the selected entry, then walk the offset.
    pub fn locate<R: Recurrence>(&self, seed: u32) -> u32 {
        advance_by::<R>(self.entry(self.index_of(seed)), self.offset_of(seed))
    }

    /// First index whose successor is not `STRIDE` steps away, if any.
    pub fn first_mismatch<R: Recurrence>(&self) -> Option<usize> {
        (0..TABLE_LEN - 1)
            .find(|&i| advance_by::<R>(self.entries[i], STRIDE) != self.entries[i + 1])
    }
}

/// Apply `R` to `x` exactly `steps` times.
pub fn advance_by<R: Recurrence>(mut x: u32, steps: u32) -> u32 {
    for _ in 0..steps {
        x = R::advance(x);
    }
    x
}

/// Record `TABLE_LEN` points `STRIDE` steps apart, starting at `start`.
///
/// This is the offline builder; generators only ever read the embedded
/// constants.
pub fn build<R: Recurrence>(start: u32) -> [u32; TABLE_LEN] {
    let mut entries = [0u32; TABLE_LEN];
    let mut x = start;
    for entry in entries.iter_mut() {
        *entry = x;
        x = advance_by::<R>(x, STRIDE);
    }
    entries
}

/// A family whose `[A, B]` halves are seeded through jump tables.
pub trait SubcycleFamily: Family<Word = u32> {
    type HalfA: Recurrence;
    type HalfB: Recurrence;

    const TABLE_A: &'static JumpTable;
    const TABLE_B: &'static JumpTable;

    /// Both halves for a 32-bit seed.
    fn locate(seed: u32) -> [u32; 2] {
        [
            Self::TABLE_A.locate::<Self::HalfA>(seed),
            Self::TABLE_B.locate::<Self::HalfB>(seed),
        ]
    }

    /// Seed whose fields select entry `index` in both tables with no walk.
    fn stride_seed(index: usize) -> u32 {
        let index = (index % TABLE_LEN) as u32;
        (index << Self::TABLE_A.index_shift) | (index << Self::TABLE_B.index_shift)
    }
}

pub type MoverHalfA = MultiplyRotate<0xACED, 28>;
pub type MoverHalfB = MultiplyRotate<0xBA55, 19>;
pub type CakeHalfA = AddRotate<0xC4DE9951, 7>;
pub type CakeHalfB = AddRotate<0xAA78EDD7, 1>;

/// Mover32 half A: entry from seed bits 9..16, walk from bits 0..9.
pub const MOVER32_A: JumpTable = JumpTable::new(MOVER32_A_ENTRIES, 9, 0);
/// Mover32 half B: entry from seed bits 25..32, walk from bits 16..25.
pub const MOVER32_B: JumpTable = JumpTable::new(MOVER32_B_ENTRIES, 25, 16);
/// Cake32 half A, same layout as Mover32.
pub const CAKE32_A: JumpTable = JumpTable::new(CAKE32_A_ENTRIES, 9, 0);
/// Cake32 half B, same layout as Mover32.
pub const CAKE32_B: JumpTable = JumpTable::new(CAKE32_B_ENTRIES, 25, 16);

// Mover32 tables start at 1; Cake32 tables start at a point known to lie on
// the long cycle of each additive recurrence.

const MOVER32_A_ENTRIES: [u32; TABLE_LEN] = [
    0x00000001, 0xB6E16604, 0x84A91149, 0x67AC52C8, 0xBEF3BB8C, 0x23CE3E07, 0x6EDBB8A1, 0x274276DF,
    0xE66E7F42, 0x782250C3, 0x284F0D35, 0xB3903E44, 0x19A162D2, 0x7DCB5533, 0x31146CDF, 0x3666EE93,
    0x4CFFC6E9, 0xE9AF02E0, 0xC0D678CA, 0x82B174C0, 0xBF6F25BA, 0x6B37ADAB, 0xA8FE16E5, 0xB7B6C86B,
    0x3C6C3DC6, 0xA9CB1833, 0xEAA1A2D7, 0x5B12EB3D, 0xFB6229D1, 0x364EA5EF, 0x582F63D5, 0x0CB374F5,
    0x8B161A5E, 0xE759784A, 0x203788FA, 0xAD6791DB, 0xFE4E70F1, 0xB5E14DA3, 0x849610A5, 0xFFFB00FF,
    0x7D28539A, 0xD0B18B9E, 0x45F2E945, 0x9346659F, 0x02E0C263, 0xFA53EEFE, 0x366BC4B5, 0xBAA06D47,
    0x714EAB99, 0xA77278AE, 0xC7536981, 0xD2D5B2EF, 0x28C69EF7, 0x3B6B15DB, 0xAC81216F, 0xC6D50F66,
    0xBFCE5018, 0x43A36D98, 0x0C111B51, 0x4AE6EAA0, 0x960F00DE, 0x60143353, 0x61FEE9CD, 0x4B0CB168,
    0x91695609, 0x9C10C765, 0x29A4343B, 0xACABAB21, 0x4374163D, 0xC3BAA736, 0x918E3147, 0xC1DAB2FB,
    0x20355E4D, 0xA0D531FF, 0x516DF23D, 0x0F41D121, 0xAF38E8F6, 0xAE866375, 0x764AAA2B, 0xA63AE93A,
    0x35B9C0C5, 0x32DCDB6A, 0xA61561D0, 0x52518525, 0x7115E9B9, 0x27B34AD3, 0x8DBBB84F, 0x0F9AEF15,
    0x199EDEDD, 0xBA5A4993, 0x3CA7D786, 0xDD2C6E48, 0x90BEA6C9, 0xAA34E309, 0xE02FB459, 0x167FCA38,
    0xA8653EE4, 0x9FCF090E, 0xCB2B47F9, 0x9A3909E5, 0x75B0F986, 0x557B897B, 0x0873C70D, 0xCAF3824B,
    0x14F63600, 0xF00EF48B, 0x337CED22, 0xBE2A3E1D, 0x5939AF06, 0x72755544, 0xBEA17CD7, 0x0767E32B,
    0x05D4FB25, 0x560A74AB, 0x58332A3A, 0x309B106B, 0x0DDF9FEF, 0xBF20AB12, 0x4900C5B9, 0xBBF4A294,
    0xB9A4B25F, 0x0E0F882B, 0xB9AB5606, 0xE4DE86BC, 0xDD026D62, 0xEBB4B162, 0xE3CA2222, 0xEA5A01C5,
];

const MOVER32_B_ENTRIES: [u32; TABLE_LEN] = [
    0x00000001, 0xA9767029, 0xC36D2FFF, 0x8BC8A46F, 0x3C586BE9, 0x654028F8, 0x3BC36ED8, 0xBCAD2EE5,
    0x12DD2D5C, 0x99D4A55B, 0xBA00D3C0, 0x4F85CF46, 0x2EDE74A5, 0xAD771823, 0x8ECC54D8, 0x2EB0955F,
    0x5C1BBA00, 0x9DB7CE62, 0x2A76D204, 0x6DC1C43E, 0xFF4E0E96, 0xE45728BB, 0x4103F12C, 0xD8E3D609,
    0x58F2587B, 0x4B169E3D, 0x00DDD04F, 0x3721B154, 0xACF777A2, 0x9715D29E, 0x46E45724, 0x299145D6,
    0x6FDD75D4, 0x572A304B, 0x17519541, 0xC59D50A6, 0x9BE5938D, 0x4AA90B25, 0x01626ACC, 0xDA9A024D,
    0x47F60DBD, 0x85BA1183, 0xF553788D, 0x1D642674, 0x50B506A0, 0x9EAC6A04, 0x3F7BFCB9, 0x5C32A24D,
    0x66B3A7AE, 0x1E0D0B7C, 0x3186148B, 0x0461A847, 0xE193E7FA, 0xB5CBB459, 0xFC7D8604, 0xF9F9C493,
    0xE038620A, 0xFFEDAC2F, 0x38FC87CD, 0x8A0E062B, 0x0EAA198F, 0xED6CBC65, 0x66A73D25, 0x5C3D77AD,
    0xCA32D8F4, 0x30D44109, 0x55AC56D7, 0x26784CD2, 0x8E95392F, 0x609DA1AB, 0xC01CBA2D, 0x36A594F5,
    0x65463BB0, 0xEC147FD9, 0xFCB3D73C, 0x13BC191E, 0x36E408C7, 0x550A1050, 0x118BCBCE, 0xF18CEFF0,
    0x781F50BC, 0xEB306A3F, 0x522147AC, 0x43EF7770, 0x48C7FD2B, 0x04965BE3, 0x557720E4, 0xBA355404,
    0x07884E1D, 0x85AB54AA, 0x1197FDFD, 0x635DEDE7, 0xBE49761B, 0xF7FA516C, 0xF1854433, 0x56133FE6,
    0x9F5F8EEF, 0x40B02A4F, 0x4E8B296F, 0xBC197E3B, 0xE896BA7F, 0x6BC0187A, 0x47FCADD1, 0xA594B585,
    0xA6517A0D, 0x45C47256, 0x8877ADD5, 0xAC8C32A7, 0x2376C425, 0x5427F940, 0xC3332A3E, 0xB3358CCA,
    0x8E6B3EDA, 0x33F7BF4F, 0x32A3294C, 0xE18EE95E, 0xAE8908E9, 0x79B012AB, 0xCEDEE0E9, 0xA3EB8638,
    0xA38C2A1A, 0xB60F4A3A, 0xFF670EC7, 0x8E1019AA, 0x9112227D, 0xDBC81559, 0x34CDFF4E, 0x5D357F7C,
];

const CAKE32_A_ENTRIES: [u32; TABLE_LEN] = [
    0x3F1B4D6F, 0xFE49EB30, 0xE1E9654D, 0x75269C79, 0xF049CFDC, 0x39AA2CA3, 0xAE2B4942, 0x2885ABA7,
    0x1E9F73B5, 0x70BB0038, 0x8520F7A1, 0x46DB32D1, 0x8EEC7226, 0x05E6D109, 0xA9642BB3, 0x1F06E452,
    0x8A797FEC, 0x3A3D2AD6, 0x52C4F8E5, 0xBF7DD4A5, 0x76509953, 0xE0859DC8, 0x45109542, 0x0BCC172D,
    0x5E0AC01B, 0xF95C78E6, 0x620B231B, 0xCBC65C2A, 0x1D0B48E3, 0x92C99C09, 0xCFE015E0, 0xAFA36608,
    0xFEB9C020, 0x330BC555, 0x1B08C181, 0xE82A4715, 0x2BC50EEA, 0xD2633538, 0xD47C6A77, 0x85819B68,
    0xF3CB4DAA, 0x70C0B372, 0x3E8A016C, 0x665AE62E, 0x8C9FAB4E, 0xB5CE5247, 0x48D1D463, 0xF6E69354,
    0x8C054216, 0xDEA535BE, 0x1643E031, 0x863CC48F, 0x42A919A2, 0x828493B0, 0xA6F36FBD, 0x6F0BEA32,
    0x4831522C, 0x41DA5987, 0x0A5CDED9, 0xA93CA28E, 0xEAAEF9F1, 0xB04F1E92, 0x156AC276, 0x6A7F1985,
    0x893D3145, 0x5E9CF016, 0xF63EA367, 0x4BDEA69B, 0xEBA5101F, 0x81852F21, 0x323888D0, 0xFA40CB32,
    0xFE263A04, 0x81284A55, 0x241A5E10, 0x95F0B8C0, 0x73189590, 0x9BDE64F6, 0xEBE4F77A, 0xA3D703AF,
    0x758B84A9, 0x1A11C9DB, 0x9011311B, 0x978464B0, 0x645DF3BA, 0x6E6C6530, 0xB9936F79, 0x370F8DB1,
    0xC25B3CA7, 0x769BE0EE, 0xFB384FCE, 0x24673C95, 0x5049F85E, 0xC8A47ED0, 0x88937012, 0x3C7A253C,
    0x70E6E593, 0x07919EA9, 0x7852B8AA, 0x5A96DBC3, 0xA25F5E9E, 0xB2714357, 0x2E099981, 0x084E5CAB,
    0x8104B545, 0xC4FB91DB, 0xF0D47528, 0xE90F1F60, 0x156CB1FB, 0x8CF95ED6, 0xC9646C64, 0x8F0B8D0C,
    0xEB78E573, 0x71C4403F, 0x1CEC03AA, 0x26728982, 0x38573D6E, 0x541A3469, 0x1ABE6703, 0x5FEC2775,
    0x08DFC2CE, 0x333BF049, 0x203501B2, 0xA2770FB0, 0x58C3C9C6, 0x8CD6D738, 0x4B20A409, 0x78E22799,
];

const CAKE32_B_ENTRIES: [u32; TABLE_LEN] = [
    0x7034B30E, 0xB1525E58, 0x28FF626B, 0xA790D90E, 0xF7DB1EE8, 0xD298C3EF, 0x604E56FC, 0x38CC5F96,
    0x87E9A14F, 0x3705913B, 0x3DC5C99A, 0xC5D1F628, 0x5DD29D0C, 0x6099AE4E, 0x05E75D29, 0x36A51877,
    0x2A568BC7, 0x99DAC54C, 0x703CC922, 0x215BA2F3, 0x6888A66F, 0x9B67A5E1, 0x1EE0BBDA, 0xF26B5F4E,
    0x89EC3742, 0x1A41C01C, 0x26651A1E, 0x444AA7DD, 0xC6F9DC15, 0x01740583, 0x4FA0B78E, 0x7C9DBD96,
    0x9C6F33BC, 0x1473D830, 0xBE8663C5, 0x91EC74EF, 0xCD24372A, 0x7F70E336, 0x2B84BDA5, 0x8656B3C9,
    0x8BCDCFE9, 0x0BBCBC39, 0xEF7ED065, 0x4A1901A6, 0x2E28F041, 0xA245F0AE, 0x84A2A30A, 0x2D0F79F6,
    0xECFF4D92, 0xAF391247, 0x4C41D5D7, 0x92F0DA6C, 0x2822C92A, 0xA582E9D1, 0xDBE16511, 0x5D032CE8,
    0x77E9BEE0, 0x1E7DA7B9, 0x0DFC9420, 0x8CA37F71, 0xEAF6C3E2, 0x39FF7169, 0x3069C773, 0xE51D7D45,
    0x826E5417, 0xC6FB882C, 0xDCD86BC5, 0xC74B2E89, 0xBD710C1A, 0xB9BC73B4, 0x801F6CE3, 0xAEFA75F3,
    0x392B6057, 0x01CC6A3C, 0x49DEFACB, 0x4A4A7778, 0x008E49A2, 0x453250E2, 0x1D4F4572, 0x5B24E245,
    0x5198DE18, 0xA2B80723, 0xFB558DE0, 0x5DDAF154, 0xD0C90DF7, 0x1564F1D2, 0x9B75BBDF, 0x40B5F84A,
    0x8A11AB2F, 0x5416579A, 0x85BC24A5, 0x525B11CB, 0xD9D8A920, 0xEC811758, 0x1365AA6E, 0x18C5D873,
    0x60BF7A51, 0xFD67BC3C, 0x728411A3, 0x5F9A2902, 0x517EA59E, 0xECB0EDCF, 0x142871D0, 0x2F2E5DF0,
    0xDEB50840, 0x02C0D2C7, 0x90BD16EF, 0x6D64B3BC, 0x98770E6A, 0x0A5C1D8C, 0xC40955D2, 0xAE7BCAA3,
    0xD3F302D4, 0xC961F091, 0xC7168F58, 0xAEC9872E, 0xC0147D0D, 0x10DF4BCC, 0x5DB46D1A, 0xAE9092B6,
    0x61D502A1, 0xB0CCAE39, 0x6039A428, 0xD331E849, 0xE3852981, 0x1F2097E2, 0xF5DF6653, 0x7F3F242E,
];
