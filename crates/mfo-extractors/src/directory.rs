//! Curated directory of entities whose pages are impractical to scrape
//! (tender portals, named government schemes, corporate accelerators, VC
//! funds). Appended to every snapshot so the CSV stays a complete reference.

use mfo_core::OpportunityRecord;

pub fn static_directory() -> Vec<OpportunityRecord> {
    vec![
        // Government tenders
        OpportunityRecord::new(
            "GeM Portal",
            "Tenders",
            "Govt e-Marketplace (Search: Medical Devices)",
            "https://gem.gov.in/",
        ),
        OpportunityRecord::new(
            "CPPP Portal",
            "Tenders",
            "Central Procurement (Search: Hospital/Lab)",
            "https://eprocure.gov.in/cppp/",
        ),
        // Ministry schemes without a scrapeable call page
        OpportunityRecord::new(
            "Startup India",
            "Seed Fund",
            "Startup India Seed Fund Scheme (SISFS)",
            "https://seedfund.startupindia.gov.in/",
        ),
        OpportunityRecord::new(
            "DST",
            "Grant",
            "NIDHI-PRAYAS (Apply via Incubators)",
            "https://nidhi-prayas.in/",
        ),
        OpportunityRecord::new(
            "MeitY",
            "Tech Grant",
            "TIDE 2.0 (Apply via C-CAMP/IITs)",
            "https://meitystartuphub.in/",
        ),
        // Corporate accelerators
        OpportunityRecord::new(
            "Pfizer",
            "Corporate",
            "Pfizer INDovation",
            "https://www.socialalpha.org/pfizer-indovation/",
        ),
        OpportunityRecord::new(
            "Marico",
            "Corporate",
            "Marico Innovation Foundation (Scale-up)",
            "https://www.maricoinnovationfoundation.org/",
        ),
        OpportunityRecord::new(
            "GE Healthcare",
            "Corporate",
            "Edison Accelerator",
            "https://www.ge.com/in/edison-accelerator",
        ),
        // VCs
        OpportunityRecord::new(
            "HealthQuad",
            "VC",
            "Venture Capital Funding",
            "https://healthquadcapital.com/",
        ),
        OpportunityRecord::new(
            "W Health Ventures",
            "VC",
            "Venture Capital Funding",
            "https://whealthventures.com/",
        ),
    ]
}
