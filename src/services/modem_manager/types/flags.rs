//! ModemManager flag types.

use bitflags::bitflags;

bitflags! {
    /// Access technologies a modem is currently using (MMModemAccessTechnology).
    ///
    /// More than one bit may be set when technologies are used simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessTechnologies: u32 {
        /// Analog wireline telephone.
        const POTS = 1 << 0;
        /// GSM.
        const GSM = 1 << 1;
        /// Compact GSM.
        const GSM_COMPACT = 1 << 2;
        /// GPRS.
        const GPRS = 1 << 3;
        /// EDGE (ETSI 27.007: "GSM w/EGPRS").
        const EDGE = 1 << 4;
        /// UMTS (ETSI 27.007: "UTRAN").
        const UMTS = 1 << 5;
        /// HSDPA (ETSI 27.007: "UTRAN w/HSDPA").
        const HSDPA = 1 << 6;
        /// HSUPA (ETSI 27.007: "UTRAN w/HSUPA").
        const HSUPA = 1 << 7;
        /// HSPA (ETSI 27.007: "UTRAN w/HSDPA and HSUPA").
        const HSPA = 1 << 8;
        /// HSPA+ (ETSI 27.007: "UTRAN w/HSPA+").
        const HSPA_PLUS = 1 << 9;
        /// CDMA2000 1xRTT.
        const ONE_X_RTT = 1 << 10;
        /// CDMA2000 EVDO revision 0.
        const EVDO0 = 1 << 11;
        /// CDMA2000 EVDO revision A.
        const EVDOA = 1 << 12;
        /// CDMA2000 EVDO revision B.
        const EVDOB = 1 << 13;
        /// LTE (ETSI 27.007: "E-UTRAN").
        const LTE = 1 << 14;
        /// 5GNR (ETSI 27.007: "NG-RAN").
        const NR5G = 1 << 15;
        /// Cat-M (ETSI 23.401: LTE Category M1/M2).
        const LTE_CAT_M = 1 << 16;
        /// NB IoT (ETSI 23.401: LTE Category NB1/NB2).
        const LTE_NB_IOT = 1 << 17;
    }
}

const NAMES: &[(AccessTechnologies, &str)] = &[
    (AccessTechnologies::POTS, "pots"),
    (AccessTechnologies::GSM, "gsm"),
    (AccessTechnologies::GSM_COMPACT, "gsm-compact"),
    (AccessTechnologies::GPRS, "gprs"),
    (AccessTechnologies::EDGE, "edge"),
    (AccessTechnologies::UMTS, "umts"),
    (AccessTechnologies::HSDPA, "hsdpa"),
    (AccessTechnologies::HSUPA, "hsupa"),
    (AccessTechnologies::HSPA, "hspa"),
    (AccessTechnologies::HSPA_PLUS, "hspa-plus"),
    (AccessTechnologies::ONE_X_RTT, "1xrtt"),
    (AccessTechnologies::EVDO0, "evdo0"),
    (AccessTechnologies::EVDOA, "evdoa"),
    (AccessTechnologies::EVDOB, "evdob"),
    (AccessTechnologies::LTE, "lte"),
    (AccessTechnologies::NR5G, "5gnr"),
    (AccessTechnologies::LTE_CAT_M, "lte-cat-m"),
    (AccessTechnologies::LTE_NB_IOT, "lte-nb-iot"),
];

impl AccessTechnologies {
    /// Wire value ModemManager uses for "any technology".
    pub const ANY_MASK: u32 = u32::MAX;

    /// Builds the human-readable summary for a raw access technology mask.
    ///
    /// An empty mask is `"unknown"`, the all-ones mask is `"any"`, anything else
    /// lists every known technology in bit order separated by `", "`.
    pub fn describe(mask: u32) -> String {
        if mask == Self::ANY_MASK {
            return "any".to_string();
        }

        let flags = Self::from_bits_truncate(mask);
        if flags.is_empty() {
            return "unknown".to_string();
        }

        NAMES
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
