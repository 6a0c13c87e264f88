//! Static clause reference library.
//!
//! A fixed catalogue of clause exemplars with buyer- and seller-leaning
//! variants. Loaded once, never mutated, browsable without network access.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::options::ParseOptionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClauseCategory {
    Employment,
    Sales,
    Lease,
    #[serde(rename = "SCoTA (Coal Trading)")]
    CoalTrading,
    Arbitration,
}

impl ClauseCategory {
    pub const ALL: [ClauseCategory; 5] = [
        Self::CoalTrading,
        Self::Employment,
        Self::Sales,
        Self::Lease,
        Self::Arbitration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employment => "Employment",
            Self::Sales => "Sales",
            Self::Lease => "Lease",
            Self::CoalTrading => "SCoTA (Coal Trading)",
            Self::Arbitration => "Arbitration",
        }
    }
}

impl fmt::Display for ClauseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClauseCategory {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("scota") || s.eq_ignore_ascii_case("coal") {
            return Ok(Self::CoalTrading);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOptionError {
                kind: "clause category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ClauseCategory,
    pub explanation: &'static str,
    pub standard_language: &'static str,
    pub pro_buyer_variation: &'static str,
    pub pro_seller_variation: &'static str,
    pub buyer_implications: &'static str,
    pub seller_implications: &'static str,
}

impl ClauseDetail {
    fn matches(&self, needle: &str, category: Option<ClauseCategory>) -> bool {
        let text_hit = self.title.to_lowercase().contains(needle)
            || self.explanation.to_lowercase().contains(needle);
        text_hit && category.is_none_or(|c| c == self.category)
    }
}

/// Every entry in catalogue order.
pub fn all() -> &'static [ClauseDetail] {
    LIBRARY
}

pub fn find(id: &str) -> Option<&'static ClauseDetail> {
    LIBRARY.iter().find(|c| c.id == id)
}

/// Case-insensitive substring search over title and explanation, optionally
/// restricted to one category. An empty term matches everything.
pub fn filter(search: &str, category: Option<ClauseCategory>) -> Vec<&'static ClauseDetail> {
    let needle = search.trim().to_lowercase();
    LIBRARY
        .iter()
        .filter(|c| c.matches(&needle, category))
        .collect()
}

/// The clause shown before the user picks one: the first coal-trading entry,
/// else the first entry.
pub fn default_selection() -> Option<&'static ClauseDetail> {
    LIBRARY
        .iter()
        .find(|c| c.category == ClauseCategory::CoalTrading)
        .or_else(|| LIBRARY.first())
}

static LIBRARY: &[ClauseDetail] = &[
    ClauseDetail {
        id: "arb-sg",
        category: ClauseCategory::Arbitration,
        title: "Singapore Arbitration (SIAC Rules)",
        explanation: "Singapore is a premier global hub for arbitration. SIAC (Singapore International Arbitration Centre) rules are widely used in international trade, especially for Asian and Australian counterparties.",
        standard_language: "Any dispute arising out of or in connection with this contract, including any question regarding its existence, validity or termination, shall be referred to and finally resolved by arbitration in Singapore in accordance with the Arbitration Rules of the Singapore International Arbitration Centre (\"SIAC Rules\") for the time being in force.",
        pro_buyer_variation: "The seat of arbitration shall be Singapore. The Tribunal shall consist of three arbitrators. The language of the arbitration shall be English. Emergency Arbitrator provisions shall apply.",
        pro_seller_variation: "The seat of arbitration shall be Singapore. The Tribunal shall consist of a sole arbitrator to minimize costs. The SIAC Expedited Procedure shall apply if the amount in dispute is less than SGD 5,000,000.",
        buyer_implications: "Provides a neutral, efficient, and highly enforceable forum. New York Convention ensures award enforceability in 160+ countries.",
        seller_implications: "Singapore is perceived as neutral and efficient, reducing the risk of local court interference compared to some other regional options.",
    },
    ClauseDetail {
        id: "arb-uae",
        category: ClauseCategory::Arbitration,
        title: "UAE Arbitration (DIAC Rules)",
        explanation: "The Dubai International Arbitration Centre (DIAC) is the primary institution in the UAE. Recent reforms have aligned DIAC rules with international best practices (UNCITRAL model).",
        standard_language: "Any dispute, difference, controversy or claim arising out of or relating to this contract shall be settled by arbitration in accordance with the Dubai International Arbitration Centre (DIAC) Arbitration Rules. The seat of arbitration shall be Dubai (DIFC).",
        pro_buyer_variation: "The seat of arbitration shall be the Dubai International Financial Centre (DIFC), ensuring the application of Common Law principles and the supervision of DIFC Courts.",
        pro_seller_variation: "The seat of arbitration shall be Dubai Mainland. The arbitration shall be conducted by a sole arbitrator appointed by DIAC. The language shall be English.",
        buyer_implications: "Choosing DIFC as the seat provides a familiar common-law framework within a civil-law country, which is often preferred by international investors.",
        seller_implications: "DIAC is well-established in the region and offers robust administrative support for local and regional disputes.",
    },
    ClauseDetail {
        id: "arb-in",
        category: ClauseCategory::Arbitration,
        title: "India Arbitration (Arbitration & Conciliation Act)",
        explanation: "Governed by the Arbitration and Conciliation Act, 1996. India has moved towards a more \"pro-arbitration\" stance with the 2015 and 2019 amendments, emphasizing time-bound resolutions.",
        standard_language: "All disputes arising out of or in connection with this contract shall be finally settled under the Arbitration and Conciliation Act, 1996. The venue and seat of arbitration shall be [City], India.",
        pro_buyer_variation: "The arbitration shall be conducted by a panel of three arbitrators. Section 29A time limits shall be strictly observed. The High Court of [State] shall have exclusive jurisdiction over interim reliefs.",
        pro_seller_variation: "The arbitration shall be conducted by a sole arbitrator to be mutually agreed upon. Fast-track procedure under Section 29B shall be adopted.",
        buyer_implications: "Local arbitration in India can be cost-effective but may face delays if the \"Fast Track\" is not strictly enforced. Ad-hoc arbitration is common.",
        seller_implications: "Allows for resolution in the jurisdiction where assets are often located, simplifying enforcement of domestic awards.",
    },
    ClauseDetail {
        id: "arb-uk",
        category: ClauseCategory::Arbitration,
        title: "UK Arbitration (LCIA Rules / Arbitration Act 1996)",
        explanation: "London is arguably the world's most significant arbitration seat. The Arbitration Act 1996 provides a clear, non-interventionist framework. The LCIA (London Court of International Arbitration) is the lead institution.",
        standard_language: "Any dispute arising out of or in connection with this contract shall be referred to and finally resolved by arbitration under the LCIA Rules, which Rules are deemed to be incorporated by reference into this clause. The seat of arbitration shall be London, England.",
        pro_buyer_variation: "The number of arbitrators shall be three. The language of the arbitration shall be English. The law of the arbitration clause shall be English law.",
        pro_seller_variation: "The number of arbitrators shall be one. The arbitration shall be conducted in accordance with the LCIA's \"Expedited Formation\" provisions in cases of exceptional urgency.",
        buyer_implications: "Highest degree of legal certainty and predictability. London arbitrators are globally recognized for expertise in maritime, trade, and insurance.",
        seller_implications: "UK courts are very supportive of arbitration and rarely set aside awards, providing finality to the dispute.",
    },
    ClauseDetail {
        id: "rbct-1",
        category: ClauseCategory::CoalTrading,
        title: "RBCT Vessel Acceptance & Vetting",
        explanation: "Richards Bay Coal Terminal (RBCT) maintains strict technical and safety standards for vessels. All vessels must be vetted and accepted by the terminal operator prior to nomination.",
        standard_language: "The Vessel nominated by the Buyer must be acceptable to the Richards Bay Coal Terminal operator. The Vessel shall comply with all current RBCT Terminal Regulations, including maximum LOA, beam, and arrival draught restrictions.",
        pro_buyer_variation: "Seller warrants that the nominated Vessel, if provided by Seller, shall be cleared by RBCT within 48 hours of nomination. Any delay in vetting exceeding 72 hours allows Buyer to nominate an alternative vessel without loss of Laycan.",
        pro_seller_variation: "Vessel acceptance is subject to RBCT terminal availability and operator discretion. Seller shall not be liable for any delays or rejection of the Vessel by the Terminal Operator provided the Vessel meets standard Capesize/Panamax specifications.",
        buyer_implications: "Rejection of a vessel at RBCT can lead to massive demurrage and loss of slot. Buyers need strict vetting warranties.",
        seller_implications: "Sellers cannot control the terminal operator's private vetting decisions and often seek to pass that risk back to the ship owner or buyer.",
    },
    ClauseDetail {
        id: "rbct-2",
        category: ClauseCategory::CoalTrading,
        title: "RBCT Laytime & Demurrage (CQD)",
        explanation: "Shipping at RBCT often involves specific \"Customary Quick Despatch\" (CQD) terms or fixed loading rates. Current regulations focus on berth productivity and terminal throughput.",
        standard_language: "Laytime shall commence in accordance with SCoTA v11, but subject to RBCT Terminal Regulations regarding \"Turn Time.\" Demurrage shall be payable at the rate specified in the Charter Party but capped at USD 35,000 per day or pro-rata.",
        pro_buyer_variation: "No Turn Time (0 hours) shall apply. Laytime to commence immediately upon Vessel arrival at RBCT pilot station, regardless of whether a berth is available (WIBON).",
        pro_seller_variation: "Standard RBCT 12-hour Turn Time applies. Laytime shall not count during periods of terminal congestion, equipment failure, or Richards Bay port closures due to high swells.",
        buyer_implications: "Richards Bay is prone to high swells. Buyers want \"WIBON\" terms to start the clock even if the port is closed.",
        seller_implications: "Sellers want to exclude port-related delays from the laytime clock to avoid paying demurrage for things outside their control.",
    },
    ClauseDetail {
        id: "rbct-3",
        category: ClauseCategory::CoalTrading,
        title: "RBCT Quality (Final at Load)",
        explanation: "Under latest RBCT regulations, the Quality of Coal is almost exclusively determined at the loading terminal. The sampling system at RBCT is considered one of the most accurate in the world.",
        standard_language: "Quality shall be determined by mechanical sampling at RBCT. The certificate of analysis issued by the independent surveyor at the loading port shall be final and binding on both parties for the purpose of invoicing.",
        pro_buyer_variation: "Buyer may appoint a witness to oversee RBCT sampling. In case of a variance >1.5% from the mine-mouth pre-shipment analysis, a second independent analysis shall be conducted at the discharge port for reference.",
        pro_seller_variation: "The RBCT Certificate of Weight and Quality is final. No discharge port results shall be admissible. Any claims for quality must be raised within 10 days of the Bill of Lading date.",
        buyer_implications: "While RBCT sampling is robust, buyers of specific grades (like API4) still worry about moisture gain or degradation during the long sea voyage to India or Europe.",
        seller_implications: "Standard practice at RBCT. Sellers rely on terminal finality to close their financing and credit lines immediately after loading.",
    },
    ClauseDetail {
        id: "scota-1",
        category: ClauseCategory::CoalTrading,
        title: "Quality Specifications (RSS)",
        explanation: "Defines the chemical and physical properties of the coal based on Revised Standard Specifications (RSS). Typically includes Net Calorific Value (NAR), Total Moisture, and Ash content.",
        standard_language: "The Quality of the Coal shall be determined in accordance with the RSS. Standard parameters: 6000 kcal/kg NAR, Max 15% Moisture, Max 14% Ash. Rejection limits apply if NAR falls below 5850 kcal/kg.",
        pro_buyer_variation: "Buyer reserves right of absolute rejection if any single parameter exceeds the \"Rejection Limit\" by more than 0.5%. Price adjustment shall be double the pro-rata rate for deviations.",
        pro_seller_variation: "Quality is final at loading port based on Seller's appointed surveyor. No rejection allowed; price adjustment (pro-rata) is the sole remedy for quality deviations.",
        buyer_implications: "Critical to ensure the coal is compatible with the power plant. Rejection limits are the primary protection against unusable fuel.",
        seller_implications: "Needs to manage blending carefully. Prefers \"Final at Load\" terms to avoid high-seas disputes and demurrage during re-testing.",
    },
    ClauseDetail {
        id: "scota-2",
        category: ClauseCategory::CoalTrading,
        title: "Sampling and Analysis (SCoTA v11)",
        explanation: "Outlines how the coal is tested. Under SCoTA, this usually involves a representative sample taken during loading/discharge and the role of an Umpire Laboratory.",
        standard_language: "Sampling and analysis shall be performed at the Loading Port by an Independent Surveyor in accordance with ISO standards. One part of the sample shall be retained for Umpire Analysis if the parties disagree by more than the ISO reproducibility limit.",
        pro_buyer_variation: "Buyer has the right to appoint a second surveyor to witness all sampling. Analysis at Discharge Port shall be the basis for final payment.",
        pro_seller_variation: "Seller's surveyor analysis is final and binding unless a manifest error is proven. Umpire costs to be borne entirely by the party requesting the test.",
        buyer_implications: "Ensures the sample isn't \"cherry-picked.\" Access to witness sampling is a standard safeguard.",
        seller_implications: "Risk of moisture gain during transit if \"Discharge Port\" terms are accepted. Prefers Loading Port results to conclude the transaction.",
    },
    ClauseDetail {
        id: "scota-3",
        category: ClauseCategory::CoalTrading,
        title: "Force Majeure (Global Coal)",
        explanation: "SCoTA uses a \"closed list\" or \"defined event\" approach to Force Majeure, which is narrower than general contract law.",
        standard_language: "Neither party is liable for failure to perform caused by: Act of God, War, Blockade, Riot, or Port Closure. Notice must be given within 48 hours of the event occurring.",
        pro_buyer_variation: "Includes \"Upstream Failures\" and \"Power Grid Failure\" as Force Majeure events, allowing Buyer to cancel without penalty if delivery is delayed > 14 days.",
        pro_seller_variation: "Specifically excludes \"Lack of Market,\" \"Strikes by Seller's Personnel,\" or \"Mine Failure.\" Seller must provide alternative coal if the primary mine is unavailable.",
        buyer_implications: "Buyers want broad protection if their plant shuts down. However, SCoTA usually protects the sanctity of the trade.",
        seller_implications: "Avoids \"speculative defaults\" where a party claims FM just because the market price changed (Price FM is strictly prohibited).",
    },
    ClauseDetail {
        id: "scota-4",
        category: ClauseCategory::CoalTrading,
        title: "Weight Determination (Draught Survey)",
        explanation: "Method for calculating the tonnage delivered. In maritime coal trades, this is usually via vessel draught survey.",
        standard_language: "The weight of the Coal shall be determined by a Draught Survey at the Loading Port conducted by an Independent Surveyor. The result shall be final and binding for invoicing.",
        pro_buyer_variation: "Weight shall be determined by certified Belt Scales at the Discharge Port. Any discrepancy >0.5% compared to Draught Survey triggers a joint re-survey.",
        pro_seller_variation: "Weight is final as per Shore Scales at the Loading Port. Any Draught Survey is for reference only.",
        buyer_implications: "Draught surveys can be manipulated (vessel ballast/fuel). Discharge weights are more accurate but carry transit loss risks.",
        seller_implications: "Prefers Loading weights to ensure they are paid for every ton that left the mine.",
    },
    ClauseDetail {
        id: "sale-1",
        category: ClauseCategory::Sales,
        title: "Limitation of Liability",
        explanation: "Caps the amount one party has to pay the other in damages if something goes wrong under the contract.",
        standard_language: "Neither party shall be liable for any indirect or consequential damages. Total liability is capped at the total fees paid under this agreement.",
        pro_buyer_variation: "Seller liability for breach of warranty or negligence is uncapped. Buyer liability is capped at 10% of contract value.",
        pro_seller_variation: "Seller total liability is capped at $1,000 or the price of the specific defective unit, whichever is lower.",
        buyer_implications: "Reduces the ability to recover full losses if the product causes significant business disruption.",
        seller_implications: "Essential for risk management. Prevents a single mistake from bankrupting the business.",
    },
];
