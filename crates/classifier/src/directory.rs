//! Helpline directory
//!
//! National baseline, per-category priority lists and per-state records.
//! Built once on first use and shared read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use janai_core::{Category, HelplineRecord};

const ERSS_NAME: &str = "Emergency Response Support System (ERSS)";
const ERSS_DESCRIPTION: &str = "All types of emergencies - Single number for all services";

fn erss() -> HelplineRecord {
    HelplineRecord::national("112", ERSS_NAME, Category::General, ERSS_DESCRIPTION)
}

static BASELINE: Lazy<Vec<HelplineRecord>> = Lazy::new(|| {
    vec![
        erss(),
        HelplineRecord::national("100", "Police", Category::Police, "Police assistance and law enforcement"),
        HelplineRecord::national("108", "Ambulance Service", Category::Medical, "Medical emergency and ambulance service"),
        HelplineRecord::national(
            "102",
            "Ambulance (Free Service)",
            Category::Medical,
            "Free ambulance service for pregnant women and children",
        ),
        HelplineRecord::national("101", "Fire Brigade", Category::Fire, "Fire emergency and rescue services"),
        HelplineRecord::national("1091", "Women Helpline", Category::Women, "Women in distress and domestic violence"),
        HelplineRecord::national("1098", "Child Helpline", Category::Child, "Child protection and assistance"),
        HelplineRecord::national("1930", "Cyber Crime Helpline", Category::Police, "Cyber crime and online fraud reporting"),
        HelplineRecord::national("14567", "Senior Citizen Helpline", Category::General, "Elder helpline for senior citizens"),
    ]
});

static CATEGORY_PRIORITY: Lazy<HashMap<Category, Vec<HelplineRecord>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        Category::Child,
        vec![
            HelplineRecord::national("1098", "Child Helpline", Category::Child, "Child protection and emergency assistance"),
            erss(),
        ],
    );
    map.insert(
        Category::Women,
        vec![
            HelplineRecord::national("1091", "Women Helpline", Category::Women, "Women in distress and domestic violence"),
            HelplineRecord::national("181", "Women in Distress Helpline", Category::Women, "24x7 helpline for women in distress"),
            erss(),
        ],
    );
    map.insert(
        Category::Police,
        vec![
            HelplineRecord::national("100", "Police", Category::Police, "Police assistance and law enforcement"),
            erss(),
            HelplineRecord::national("1930", "Cyber Crime Helpline", Category::Police, "Cyber crime and online fraud reporting"),
        ],
    );
    map.insert(
        Category::Medical,
        vec![
            HelplineRecord::national("108", "Ambulance Service", Category::Medical, "Medical emergency and ambulance service"),
            HelplineRecord::national(
                "102",
                "Ambulance (Free Service)",
                Category::Medical,
                "Free ambulance service for pregnant women and children",
            ),
            erss(),
        ],
    );
    map.insert(
        Category::Fire,
        vec![
            HelplineRecord::national("101", "Fire Brigade", Category::Fire, "Fire emergency and rescue services"),
            erss(),
        ],
    );
    map.insert(
        Category::Electricity,
        vec![
            HelplineRecord::national("1912", "Power Grid Emergency", Category::Electricity, "National power grid emergencies and outages"),
            HelplineRecord::national(
                "1800-11-4004",
                "Ministry of Power Helpline",
                Category::Electricity,
                "Power supply complaints and consumer grievances",
            ),
            erss(),
        ],
    );
    map.insert(
        Category::Water,
        vec![
            HelplineRecord::national("1916", "Water Supply Helpline", Category::Water, "Water supply complaints and emergency repairs"),
            HelplineRecord::national(
                "1800-11-3155",
                "Jal Shakti Ministry Helpline",
                Category::Water,
                "National water resources and quality complaints",
            )
            .with_availability("9 AM - 6 PM"),
            erss(),
        ],
    );
    map.insert(
        Category::Transport,
        vec![
            HelplineRecord::national("139", "Railway Inquiry", Category::Transport, "Railway information and emergency assistance"),
            HelplineRecord::national("1033", "Tourist Helpline", Category::Transport, "Tourist assistance and travel emergency support"),
            HelplineRecord::national("1800-11-1363", "Road Transport Helpline", Category::Transport, "Road transport complaints and assistance"),
            erss(),
        ],
    );
    map.insert(Category::General, vec![erss()]);

    map
});

static STATE_RECORDS: Lazy<HashMap<&'static str, Vec<HelplineRecord>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    let up = "Uttar Pradesh";
    map.insert(
        up,
        vec![
            HelplineRecord::state(up, "1076", "UP CM Helpline", Category::General, "Chief Minister Helpline"),
            HelplineRecord::state(up, "1090", "UP Women Helpline", Category::Women, "Women safety and assistance"),
        ],
    );

    let mh = "Maharashtra";
    map.insert(
        mh,
        vec![
            HelplineRecord::state(mh, "1916", "Maharashtra Sarkar Call Center", Category::General, "State government helpline"),
            HelplineRecord::state(mh, "103", "Maharashtra Emergency Health", Category::Medical, "Health emergency services"),
        ],
    );

    let dl = "Delhi";
    map.insert(
        dl,
        vec![
            HelplineRecord::state(dl, "1031", "Delhi Police Control Room", Category::Police, "Delhi Police assistance"),
            HelplineRecord::state(dl, "1077", "Delhi Fire Service", Category::Fire, "Fire emergency services"),
            HelplineRecord::state(
                dl,
                "19123",
                "BSES Rajdhani Power Limited",
                Category::Electricity,
                "Power complaints for South & West Delhi",
            ),
            HelplineRecord::state(
                dl,
                "19122",
                "BSES Yamuna Power Limited",
                Category::Electricity,
                "Power complaints for Central & East Delhi",
            ),
            HelplineRecord::state(
                dl,
                "19124",
                "Tata Power Delhi Distribution",
                Category::Electricity,
                "Power complaints for North & North-West Delhi",
            ),
            HelplineRecord::state(dl, "1800-208-9124", "Tata Power Toll-Free", Category::Electricity, "Tata Power toll-free line"),
        ],
    );

    let ka = "Karnataka";
    map.insert(
        ka,
        vec![
            HelplineRecord::state(ka, "1090", "Karnataka Women Helpline", Category::Women, "Women safety helpline"),
            HelplineRecord::state(ka, "104", "Karnataka Health Helpline", Category::Medical, "Health services helpline"),
        ],
    );

    let tn = "Tamil Nadu";
    map.insert(
        tn,
        vec![
            HelplineRecord::state(tn, "1077", "Tamil Nadu Fire Service", Category::Fire, "Fire and rescue services"),
            HelplineRecord::state(tn, "104", "Tamil Nadu Health Helpline", Category::Medical, "Health emergency services"),
        ],
    );

    let gj = "Gujarat";
    map.insert(
        gj,
        vec![
            HelplineRecord::state(gj, "181", "Gujarat Women Helpline", Category::Women, "Women safety and support"),
            HelplineRecord::state(gj, "104", "Gujarat Health Helpline", Category::Medical, "Medical assistance"),
        ],
    );

    let wb = "West Bengal";
    map.insert(
        wb,
        vec![
            HelplineRecord::state(wb, "1098", "West Bengal Child Helpline", Category::Child, "Child safety and protection"),
            // Disaster response has no category of its own
            HelplineRecord::state(wb, "1515", "West Bengal Disaster Management", Category::General, "Disaster response"),
        ],
    );

    let ap = "Andhra Pradesh";
    map.insert(
        ap,
        vec![
            HelplineRecord::state(ap, "1100", "AP Emergency Services", Category::General, "State emergency services"),
            HelplineRecord::state(ap, "104", "AP Health Services", Category::Medical, "Health emergency"),
        ],
    );

    let tg = "Telangana";
    map.insert(
        tg,
        vec![
            HelplineRecord::state(tg, "1100", "Telangana Emergency", Category::General, "State emergency services"),
            HelplineRecord::state(tg, "1912", "TSSPDCL/TPGPDCL", Category::Electricity, "Electricity complaints and outages"),
            HelplineRecord::state(tg, "155313", "HMWSSB Water Supply", Category::Water, "Hyderabad water supply and sewerage"),
            HelplineRecord::state(tg, "040-23300114", "HMWSSB Support", Category::Water, "Water supply additional support"),
            HelplineRecord::state(tg, "9281097233", "Ground Water Department", Category::Water, "Groundwater assistance and issues")
                .with_availability("Office Hours"),
            HelplineRecord::state(tg, "1098", "Childline Telangana", Category::Child, "Child protection and assistance"),
            HelplineRecord::state(tg, "181", "Women Helpline", Category::Women, "Domestic abuse and women safety"),
            HelplineRecord::state(tg, "9059693448", "Women's Protection Cell", Category::Women, "Women protection and safety"),
            HelplineRecord::state(tg, "040-27852355", "Bharosa Hyderabad", Category::Women, "Women and children support center")
                .with_availability("Office Hours"),
            HelplineRecord::state(tg, "155209", "Anganwadi Helpline", Category::Women, "Women and child welfare services"),
            HelplineRecord::state(tg, "14567", "Elderly Helpline", Category::General, "Senior citizen assistance"),
            HelplineRecord::state(tg, "1800-599-12345", "Pregnant Women Helpline", Category::Women, "Pregnancy and maternity support"),
            HelplineRecord::state(tg, "14416", "Tele-Mental Health", Category::Medical, "Mental health support and counseling"),
            HelplineRecord::state(tg, "104", "Medical Advice EMRI", Category::Medical, "State health advice service"),
            HelplineRecord::state(tg, "040-23370081", "Transport Department", Category::Transport, "Transport grievances and citizen support")
                .with_availability("10 AM-6 PM (Working Days)"),
            HelplineRecord::state(tg, "1800-425-1110", "T App Folio Support", Category::Transport, "Transport app and services support"),
        ],
    );

    let kl = "Kerala";
    map.insert(
        kl,
        vec![
            HelplineRecord::state(kl, "1077", "Kerala Fire Service", Category::Fire, "Fire and rescue"),
            HelplineRecord::state(kl, "104", "Kerala Health Helpline", Category::Medical, "Medical emergency"),
        ],
    );

    map
});

/// National baseline in fixed order
pub fn national_baseline() -> &'static [HelplineRecord] {
    &BASELINE
}

/// National records to list first for a category
pub fn category_priority(category: Category) -> &'static [HelplineRecord] {
    CATEGORY_PRIORITY
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Records for a canonical state name; empty for unknown states
pub fn state_records(state: &str) -> &'static [HelplineRecord] {
    STATE_RECORDS.get(state).map(Vec::as_slice).unwrap_or(&[])
}

/// Full directory view for a state: national baseline then state records,
/// deduplicated by number
pub fn directory_for_state(state: &str) -> Vec<HelplineRecord> {
    let mut seen = std::collections::HashSet::new();
    national_baseline()
        .iter()
        .chain(state_records(state))
        .filter(|record| seen.insert(record.number.as_str()))
        .cloned()
        .collect()
}
