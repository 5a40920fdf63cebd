//! The ISO 4217 catalog of current and historical currencies.
//!
//! Each code is a lazily built process static:
//!
//! ```
//! use strictmoney_core::currency::catalog;
//!
//! let price = catalog::SEK.money("523.12").unwrap();
//! assert_eq!(price.to_string(), "523.12\u{a0}SEK");
//! ```

use once_cell::sync::Lazy;

use super::definition::Currency;
use super::registry::{CurrencyCollector, CurrencyRegistry};

macro_rules! iso_catalog {
    ($($code:ident => $subunit:literal),* $(,)?) => {
        $(
            #[doc = concat!("ISO 4217 `", stringify!($code), "`.")]
            pub static $code: Lazy<Currency> =
                Lazy::new(|| Currency::catalog_entry(stringify!($code), $subunit));
        )*

        static REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(|| {
            let mut collector = CurrencyCollector::new();
            $(collector.add(*$code);)*
            collector.finalize()
        });
    };
}

/// The default registry holding every catalog currency.
#[must_use]
pub fn registry() -> &'static CurrencyRegistry {
    &REGISTRY
}

iso_catalog! {
    ADP => 1, AFA => 100, ALK => 1, AON => 1, AOR => 1, ARA => 100, ARP => 100, ATS => 100,
    AZM => 100, BAD => 100, BEF => 100, BGL => 100, BRC => 100, BRE => 100, BRN => 100,
    BRR => 100, BYR => 1, CLE => 1, CSD => 100, CSK => 1, CYP => 100, DDM => 1, DEM => 100,
    ECS => 1, ECV => 100, EEK => 100, ESA => 1, ESB => 1, ESP => 1, FIM => 100, FRF => 100,
    GHC => 100, GRD => 100, GWP => 100, HRD => 100, IEP => 100, ITL => 1, LTL => 100,
    LUF => 100, LVL => 100, MGF => 1, MLF => 1, MRO => 100, MTL => 100, MZM => 100, NLG => 100,
    PEI => 1, PLZ => 100, PTE => 1, ROL => 1, RUR => 100, SDD => 100, SIT => 100, SKK => 100,
    SRG => 100, STD => 100, TJR => 1, TMM => 100, TPE => 1, TRL => 1, UAK => 100, USS => 100,
    VEB => 100, VEF => 100, VNN => 1, XEU => 1, YDD => 1, YUM => 100, YUN => 100, ZAL => 100,
    ZMK => 100, ZRN => 100, ZRZ => 100, ZWD => 100, ZWL => 100, ZWR => 100, AOK => 1,
    ARL => 100, ARM => 100, BAN => 1, BEC => 1, BEL => 1, BGM => 1, BGO => 1, BOL => 1,
    BOP => 100, BRB => 100, BRZ => 100, BUK => 1, BYB => 100, CNH => 100, CNX => 100, GEK => 1,
    GNS => 1, GQE => 1, GWE => 1, ILP => 100, ILR => 100, ISJ => 100, KRH => 1, KRO => 1,
    LTT => 100, LUC => 1, LUL => 1, LVR => 100, MAF => 100, MCF => 100, MDC => 1, MKN => 1,
    MRU => 100, MTP => 1, MVP => 1, MXP => 1, MZE => 100, NIC => 100, PES => 100, RHD => 100,
    SDP => 1, STN => 100, SUR => 1, UGS => 1, UYP => 100, UYW => 10000, VES => 100, XRE => 1,
    YUD => 100, YUR => 100, AED => 100, AFN => 100, ALL => 100, AMD => 100, ANG => 100,
    AOA => 100, ARS => 100, AUD => 100, AWG => 100, AZN => 100, BAM => 100, BBD => 100,
    BDT => 100, BGN => 100, BHD => 1000, BIF => 1, BMD => 100, BND => 100, BOB => 100,
    BOV => 100, BRL => 100, BSD => 100, BTN => 100, BWP => 100, BYN => 100, BZD => 100,
    CAD => 100, CDF => 100, CHE => 100, CHF => 100, CHW => 100, CLF => 10000, CLP => 1,
    CNY => 100, COP => 100, COU => 100, CRC => 100, CUC => 100, CUP => 100, CVE => 100,
    CZK => 100, DJF => 1, DKK => 100, DOP => 100, DZD => 100, EGP => 100, ERN => 100,
    ETB => 100, EUR => 100, FJD => 100, FKP => 100, GBP => 100, GEL => 100, GHS => 100,
    GIP => 100, GMD => 100, GNF => 1, GTQ => 100, GYD => 100, HKD => 100, HNL => 100,
    HRK => 100, HTG => 100, HUF => 100, IDR => 100, ILS => 100, IMP => 100, INR => 100,
    IQD => 1000, IRR => 100, ISK => 1, JMD => 100, JOD => 1000, JPY => 1, KES => 100,
    KGS => 100, KHR => 100, KMF => 1, KPW => 100, KRW => 1, KWD => 1000, KYD => 100, KZT => 100,
    LAK => 100, LBP => 100, LKR => 100, LRD => 100, LSL => 100, LYD => 1000, MAD => 100,
    MDL => 100, MGA => 100, MKD => 100, MMK => 100, MNT => 100, MOP => 100, MUR => 100,
    MVR => 100, MWK => 100, MXN => 100, MXV => 100, MYR => 100, MZN => 100, NAD => 100,
    NGN => 100, NIO => 100, NOK => 100, NPR => 100, NZD => 100, OMR => 1000, PAB => 100,
    PEN => 100, PGK => 100, PHP => 100, PKR => 100, PLN => 100, PYG => 1, QAR => 100,
    RON => 100, RSD => 100, RUB => 100, RWF => 1, SAR => 100, SBD => 100, SCR => 100,
    SDG => 100, SEK => 100, SGD => 100, SHP => 100, SLL => 100, SOS => 100, SRD => 100,
    SSP => 100, SVC => 100, SYP => 100, SZL => 100, THB => 100, TJS => 100, TMT => 100,
    TND => 1000, TOP => 100, TRY => 100, TTD => 100, TVD => 100, TWD => 100, TZS => 100,
    UAH => 100, UGX => 1, USD => 100, USN => 100, UYI => 1, UYU => 100, UZS => 100, VND => 1,
    VUV => 1, WST => 100, XAF => 1, XAG => 1, XAU => 1, XBA => 1, XBB => 1, XBC => 1, XBD => 1,
    XCD => 100, XDR => 1, XFO => 1, XFU => 1, XOF => 1, XPD => 1, XPF => 1, XPT => 1, XSU => 1,
    XTS => 1, XUA => 1, XXX => 1, YER => 100, ZAR => 100, ZMW => 100, ZWN => 100,
}
