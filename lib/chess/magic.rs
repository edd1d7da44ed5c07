use crate::chess::{Bitboard, Square};
use crate::util::Int;

/// Magic multiplication factors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Magic(u64);

impl Magic {
    /// The multiplier.
    #[inline(always)]
    pub const fn factor(&self) -> u64 {
        self.0
    }

    /// Hashes `bb` into a bucket in `0..1 << bits` using the top bits of the product.
    #[inline(always)]
    pub const fn hash(&self, bb: Bitboard, bits: u32) -> usize {
        (bb.0.wrapping_mul(self.0) >> (u64::BITS - bits)) as usize
    }

    /// Knight magics tuned to bucket the targets a knight attacks from each square into 8 bits.
    ///
    /// The mapping is near-perfect over the subsets of [`Bitboard::knight`], but not collision-free
    /// over arbitrary bitboards.
    #[inline(always)]
    pub fn knight(sq: Square) -> Self {
        #[rustfmt::skip]
        const MAGICS: [Magic; 64] = [
            Magic(2649526798775546678), Magic(4152603468059905820),
            Magic(4323738553495348598), Magic(8358822318513263564),
            Magic(8233741379241091944), Magic(15862258506660595117),
            Magic(11034153426427387283), Magic(5179342299017078485),
            Magic(13953775647861833869), Magic(9285332830472462433),
            Magic(4707670090173510570), Magic(633188408852161521),
            Magic(9295575317119436597), Magic(2602449537074926626),
            Magic(10402735044161298543), Magic(5209354341409342328),
            Magic(162625749878507151), Magic(1009651158123930541),
            Magic(17868030413482491775), Magic(18157387793351835647),
            Magic(18428448182976380927), Magic(15559866339509124062),
            Magic(15570116201671053920), Magic(1155280919795624321),
            Magic(2486129120195482830), Magic(13187947271813240921),
            Magic(18406210577484414942), Magic(18427602675714473387),
            Magic(18441114298743767039), Magic(13816761900458831871),
            Magic(6080440195611631637), Magic(17058553541789489427),
            Magic(16801810908685894692), Magic(10863528935562739968),
            Magic(18302056847512170491), Magic(13832238890018011135),
            Magic(18441604947771359199), Magic(4539399656176549631),
            Magic(10034574284689510417), Magic(6922771568222818337),
            Magic(4170423972204183689), Magic(13981410758149154305),
            Magic(1458212938463817744), Magic(14940013606182964225),
            Magic(10126812077910748164), Magic(14499197477661460225),
            Magic(10889334102842943525), Magic(11449759955925008433),
            Magic(7662239901190162178), Magic(10624671891104776129),
            Magic(17829790316069208625), Magic(834552698710835841),
            Magic(1569976736693633153), Magic(18290846858870916161),
            Magic(12326740164105761617), Magic(5482981632183385993),
            Magic(9386590720569999446), Magic(5202246693298479759),
            Magic(15779688972541825106), Magic(13366487713771978889),
            Magic(11198365102992539725), Magic(15043574735303614497),
            Magic(18334953575009493081), Magic(975649118817374295),
        ];

        MAGICS[sq.index()]
    }
}
