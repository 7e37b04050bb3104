//! Localized response text and actionable recommendations

use janai_core::{Category, Language, UrgencyLevel, ALL_INDIA};

/// Languages with a localized response template
const LOCALIZED: &[Language] = &[
    Language::English,
    Language::Hindi,
    Language::Tamil,
    Language::Telugu,
    Language::Marathi,
    Language::Bengali,
];

/// Response templates per category, indexed like `LOCALIZED`
fn templates(category: Category) -> [&'static str; 6] {
    match category {
        Category::Child => [
            "Child emergency! Call Childline 1098 immediately.",
            "बच्चों की आपातकाल! चाइल्डलाइन 1098 से तुरंत संपर्क करें।",
            "குழந்தைகள் அவசரநிலை! உடனே சைல்ட்லைன் 1098 ஐ அழைக்கவும்.",
            "పిల్లల అత్యవసర పరిస్థితి! వెంటనే చైల్డ్ లైన్ 1098 కు కాల్ చేయండి.",
            "मुलांची आपत्कालीन परिस्थिती! मुलांच्या संरक्षणासाठी चाइल्डलाइन 1098 वर ताबडतोब कॉल करा.",
            "শিশুদের জরুরি অবস্থা! অবিলম্বে চাইল্ডলাইন ১০৯৮ এ কল করুন।",
        ],
        Category::Women => [
            "Women assistance! Call Women Helpline 1091 or 181.",
            "महिला सहायता! महिला हेल्पलाइन 1091 या 181 पर कॉल करें।",
            "பெண்கள் உதவி! பெண்கள் ஹெல்ப்லைன் 1091 அல்லது 181 ஐ அழைக்கவும்.",
            "మహిళల సహాయం! మహిళా హెల్ప్‌లైన్ 1091 లేదా 181 కు కాల్ చేయండి.",
            "महिला मदत! महिला हेल्पलाइन 1091 किंवा 181 वर कॉल करा.",
            "মহিলা সহায়তা! মহিলা হেল্পলাইন ১০৯১ বা ১৮১ এ কল করুন।",
        ],
        Category::Police => [
            "Police assistance! Call Police 100 or Emergency 112.",
            "पुलिस सहायता! पुलिस हेल्पलाइन 100 या आपातकालीन नंबर 112 पर कॉल करें।",
            "காவல்துறை உதவி! காவல்துறை ஹெல்ப்லைன் 100 அல்லது 112 ஐ அழைக்கவும்.",
            "పోలీసు సహాయం! పోలీసు హెల్ప్‌లైన్ 100 లేదా 112 కు కాల్ చేయండి.",
            "पोलीस मदत! पोलीस हेल्पलाइन 100 किंवा 112 वर कॉल करा.",
            "পুলিশ সহায়তা! পুলিশ হেল্পলাইন ১০০ বা ১১২ এ কল করুন।",
        ],
        Category::Medical => [
            "Medical emergency! Call Ambulance 108 or 102.",
            "चिकित्सा आपातकाल! एम्बुलेंस के लिए 108 या 102 पर कॉल करें।",
            "மருத்துவ அவசரநிலை! ஆம்புலன்ஸுக்கு 108 அல்லது 102 ஐ அழைக்கவும்.",
            "వైద్య అత్యవసర పరిస్థితి! అంబులెన్స్ కోసం 108 లేదా 102 కు కాల్ చేయండి.",
            "वैद्यकीय आपत्कालीन परिस्थिती! रुग्णवाहिकेसाठी 108 किंवा 102 वर कॉल करा.",
            "চিকিৎসা জরুরি অবস্থা! অ্যাম্বুলেন্সের জন্য ১০৮ বা ১০২ এ কল করুন।",
        ],
        Category::Fire => [
            "Fire emergency! Call Fire Brigade 101 or 112 immediately.",
            "आग की आपातकाल! फायर ब्रिगेड 101 या 112 पर तुरंत कॉल करें।",
            "தீ அவசரநிலை! உடனே தீயணைப்பு 101 அல்லது 112 ஐ அழைக்கவும்.",
            "అగ్ని ప్రమాదం! వెంటనే ఫైర్ బ్రిగేడ్ 101 లేదా 112 కు కాల్ చేయండి.",
            "आगीची आपत्कालीन परिस्थिती! अग्निशमन दल 101 किंवा 112 वर ताबडतोब कॉल करा.",
            "আগুনের জরুরি অবস্থা! অবিলম্বে ফায়ার ব্রিগেড ১০১ বা ১১২ এ কল করুন।",
        ],
        Category::Electricity => [
            "Electricity problem! Call Power Grid Helpline 1912.",
            "बिजली की समस्या! पावर ग्रिड हेल्पलाइन 1912 पर कॉल करें।",
            "மின்சார பிரச்சினை! பவர் கிரிட் ஹெல்ப்லைன் 1912 ஐ அழைக்கவும்.",
            "కరెంట్ సమస్య! పవర్ గ్రిడ్ హెల్ప్‌లైన్ 1912 కు కాల్ చేయండి.",
            "वीजेची समस्या! पॉवर ग्रिड हेल्पलाइन 1912 वर कॉल करा.",
            "বিদ্যুতের সমস্যা! পাওয়ার গ্রিড হেল্পলাইন ১৯১২ এ কল করুন।",
        ],
        Category::Water => [
            "Water problem! Call Water Supply Helpline 1916.",
            "पानी की समस्या! जल आपूर्ति हेल्पलाइन 1916 पर कॉल करें।",
            "தண்ணீர் பிரச்சினை! நீர் விநியோக ஹெல்ப்லைன் 1916 ஐ அழைக்கவும்.",
            "నీటి సమస్య! వాటర్ సప్లై హెల్ప్‌లైన్ 1916 కు కాల్ చేయండి.",
            "पाण्याची समस्या! वॉटर सप्लाय हेल्पलाइन 1916 वर कॉल करा.",
            "জলের সমস্যা! ওয়াটার সাপ্লাই হেল্পলাইন ১৯১৬ এ কল করুন।",
        ],
        Category::Transport => [
            "Transport problem! Call Railway Inquiry 139 or Tourist Helpline 1033.",
            "यातायात की समस्या! रेलवे पूछताछ 139 या पर्यटक हेल्पलाइन 1033 पर कॉल करें।",
            "போக்குவரத்து பிரச்சினை! ரயில்வே விசாரணை 139 அல்லது சுற்றுலா ஹெல்ப்லைன் 1033 ஐ அழைக்கவும்.",
            "రవాణా సమస్య! రైల్వే ఎంక్వైరీ 139 లేదా టూరిస్ట్ హెల్ప్‌లైన్ 1033 కు కాల్ చేయండి.",
            "वाहतुकीची समस्या! रेल्वे चौकशी 139 किंवा पर्यटक हेल्पलाइन 1033 वर कॉल करा.",
            "পরিবহন সমস্যা! রেলওয়ে অনুসন্ধান ১৩৯ বা ট্যুরিস্ট হেল্পলাইন ১০৩৩ এ কল করুন।",
        ],
        Category::General => [
            "Emergency detected. Help is on the way. Please stay calm.",
            "आपातकाल का पता चला है। सहायता आ रही है। कृपया शांत रहें।",
            "அவசரநிலை கண்டறியப்பட்டது. உதவி வருகிறது. தயவுசெய்து அமைதியாக இருங்கள்.",
            "అత్యవసర పరిస్థితి గుర్తించబడింది. సహాయం వస్తోంది. దయచేసి ప్రశాంతంగా ఉండండి.",
            "आपत्कालीन स्थिती ओळखली गेली. मदत येत आहे. कृपया शांत राहा.",
            "জরুরি অবস্থা চিহ্নিত হয়েছে। সাহায্য আসছে। অনুগ্রহ করে শান্ত থাকুন।",
        ],
    }
}

/// Response text for a category in the caller's language, English otherwise
pub fn response_text(category: Category, language: Language) -> &'static str {
    let index = LOCALIZED.iter().position(|l| *l == language).unwrap_or(0);
    templates(category)[index]
}

/// Actionable steps for a resolved category
///
/// State-level emergency lines are added for urgent categories when a
/// specific state is known, followed by directory lines in the caller's
/// language.
pub fn recommendations(
    category: Category,
    urgency: UrgencyLevel,
    state: &str,
    language: Language,
) -> Vec<String> {
    let delhi = state.eq_ignore_ascii_case("Delhi");
    let escalated = urgency >= UrgencyLevel::High;

    let base: &[&str] = match category {
        Category::Child => &[
            "Contact Childline India (1098)",
            "Report to local police station",
            "Contact child protection unit",
            "Contact National Commission for Protection of Child Rights",
            "Call 112 for immediate assistance",
        ],
        Category::Women => &[
            "Contact National Women Helpline (181)",
            "Call 112 for immediate assistance",
            "Contact local women protection cell",
            "Contact Women and Child Protection Unit",
            "File complaint at nearest police station",
        ],
        Category::Police => &[
            "Call 100 for police assistance",
            "Call 112 for emergency police help",
            "Call 1930 to report cyber crime or online fraud",
            "Contact nearest police station",
            "File complaint at local police station",
        ],
        Category::Medical if urgency == UrgencyLevel::Critical => &[
            "Call 112 immediately for medical emergency",
            "Call 102 for ambulance (free service)",
            "Call 108 for ambulance (state-specific)",
            "Call 1099 for specialized trauma assistance",
            "Contact nearest hospital emergency department",
            "Call National Health Helpline (1075)",
        ],
        Category::Medical => &[
            "Contact National Health Helpline (1075)",
            "Contact local hospital",
            "Contact nearest primary health center",
        ],
        Category::Fire => &[
            "Call 101 for fire emergency",
            "Call 112 for immediate assistance",
            "Evacuate the area immediately",
            "Call nearest fire station",
        ],
        Category::Electricity if delhi => &[
            "BSES Rajdhani Power Limited (South & West Delhi): 19123",
            "BSES Yamuna Power Limited (Central & East Delhi): 19122",
            "Tata Power Delhi Distribution (North & North-West Delhi): 19124",
            "Tata Power Toll-Free (Outside Delhi): 1800-208-9124",
            "Delhi Electricity Regulatory Commission: +91-11-41080417",
            "Call 112 for emergency power issues",
        ],
        Category::Electricity => &[
            "Call Power Grid Helpline (1912)",
            "Contact local electricity board",
            "Report to power distribution company",
            "Call 112 for emergency power issues",
        ],
        Category::Water => &[
            "Call Water Supply Helpline (1916)",
            "Contact local water supply department",
            "Call municipal corporation water helpline",
            "Report to local authority",
            "Call 112 for emergency water issues",
        ],
        Category::Transport if escalated => &[
            "Call 112 for emergency assistance",
            "Call 102 for ambulance (free service)",
            "Call 108 for ambulance (state-specific)",
            "Contact Highway Patrol",
            "Call National Highway Helpline (1033)",
        ],
        Category::Transport => &[
            "Call Railway Inquiry (139)",
            "Contact local transport authority",
            "Call National Highway Helpline (1033)",
            "Contact local police for directions",
        ],
        Category::General => &["Contact 112 for emergency assistance"],
    };

    let mut lines: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    let urgent_category = matches!(category, Category::Police | Category::Fire)
        || (category == Category::Medical && urgency == UrgencyLevel::Critical)
        || (category == Category::Transport && escalated);
    if urgent_category {
        lines.extend(state_emergency_lines(state));
    }

    lines.extend(localized_directory(language, state).iter().map(|s| s.to_string()));
    lines
}

/// English state emergency lines; empty when the state is not specific
pub fn state_emergency_lines(state: &str) -> Vec<String> {
    if state == ALL_INDIA {
        return Vec::new();
    }
    match state.to_lowercase().as_str() {
        "maharashtra" => vec![
            "Call 108 for ambulance (Maharashtra)".to_string(),
            "Call 104 for fire/medical (Maharashtra)".to_string(),
            "Call 100 for police (Maharashtra)".to_string(),
        ],
        "karnataka" => vec![
            "Call 104 for medical advice (Arogyavani)".to_string(),
            "Call 108 for ambulance (Karnataka)".to_string(),
            "Call 100 for police (Karnataka)".to_string(),
        ],
        "delhi" => vec![
            "Call 102 for ambulance (Delhi)".to_string(),
            "Call 100 for police (Delhi)".to_string(),
            "Call 101 for fire (Delhi)".to_string(),
        ],
        "uttar pradesh" => vec![
            "Call 108 for ambulance (UP)".to_string(),
            "Call 100 for police (UP)".to_string(),
            "Call 101 for fire (UP)".to_string(),
        ],
        "tamil nadu" | "gujarat" | "west bengal" | "andhra pradesh" | "telangana" | "kerala"
        | "punjab" => vec![
            format!("Call 108 for ambulance ({state})"),
            format!("Call 100 for police ({state})"),
            format!("Call 101 for fire ({state})"),
        ],
        _ => Vec::new(),
    }
}

/// Directory lines in the caller's language, for the state when one
/// exists, otherwise the language's general list
pub fn localized_directory(language: Language, state: &str) -> &'static [&'static str] {
    let state = state.to_lowercase();
    let by_state: Option<&'static [&'static str]> = match (language, state.as_str()) {
        (Language::Hindi, "delhi") => Some(&[
            "दिल्ली पुलिस हेल्पलाइन: 100",
            "दिल्ली एम्बुलेंस: 102",
            "दिल्ली फायर ब्रिगेड: 101",
        ]),
        (Language::Hindi, "maharashtra") => Some(&[
            "महाराष्ट्र पुलिस हेल्पलाइन: 100",
            "महाराष्ट्र एम्बुलेंस: 108",
            "महाराष्ट्र फायर ब्रिगेड: 101",
        ]),
        (Language::Hindi, "uttar pradesh") => Some(&[
            "उत्तर प्रदेश पुलिस हेल्पलाइन: 100",
            "उत्तर प्रदेश एम्बुलेंस: 108",
            "उत्तर प्रदेश फायर ब्रिगेड: 101",
        ]),
        (Language::Bengali, "west bengal") => Some(&[
            "পশ্চিমবঙ্গ পুলিশ হেল্পলাইন: 100",
            "পশ্চিমবঙ্গ অ্যাম্বুলেন্স: 108",
            "পশ্চিমবঙ্গ ফায়ার ব্রিগেড: 101",
        ]),
        (Language::Tamil, "tamil nadu") => Some(&[
            "தமிழ்நாடு காவல்துறை ஹெல்ப்லைன்: 100",
            "தமிழ்நாடு ஆம்புலன்ஸ்: 108",
            "தமிழ்நாடு தீயணைப்பு பிரிகேட்: 101",
        ]),
        (Language::Telugu, "andhra pradesh") => Some(&[
            "ఆంధ్రప్రదేశ్ పోలీసు హెల్ప్‌లైన్: 100",
            "ఆంధ్రప్రదేశ్ ఆంబులెన్స్: 108",
            "ఆంధ్రప్రదేశ్ అగ్నిమాపక బ్రిగేడ్: 101",
        ]),
        (Language::Telugu, "telangana") => Some(&[
            "తెలంగాణ పోలీసు హెల్ప్‌లైన్: 100",
            "తెలంగాణ ఆంబులెన్స్: 108",
            "తెలంగాణ అగ్నిమాపక బ్రిగేడ్: 101",
        ]),
        (Language::Gujarati, "gujarat") => Some(&[
            "ગુજરાત પોલીસ હેલ્પલાઈન: 100",
            "ગુજરાત એમ્બ્યુલન્સ: 108",
            "ગુજરાત ફાયર બ્રિગેડ: 101",
        ]),
        (Language::Marathi, "maharashtra") => Some(&[
            "महाराष्ट्र पोलीस हेल्पलाईन: 100",
            "महाराष्ट्र एम्ब्युलन्स: 108",
            "महाराष्ट्र फायर ब्रिगेड: 101",
        ]),
        (Language::Kannada, "karnataka") => Some(&[
            "ಕರ್ನಾಟಕ ಪೊಲೀಸ್ ಹೆಲ್ಪ್‌ಲೈನ್: 100",
            "ಕರ್ನಾಟಕ ಆಂಬ್ಯುಲೆನ್ಸ್: 108",
            "ಕರ್ನಾಟಕ ಅಗ್ನಿಮಾಪಕ ಬ್ರಿಗೇಡ್: 101",
        ]),
        (Language::Malayalam, "kerala") => Some(&[
            "കേരള പോലീസ് ഹെൽപ്പ്‌ലൈൻ: 100",
            "കേരള ആംബുലൻസ്: 108",
            "കേരള ഫയർ ബ്രിഗേഡ്: 101",
        ]),
        _ => None,
    };

    by_state.unwrap_or_else(|| general_directory(language))
}

fn general_directory(language: Language) -> &'static [&'static str] {
    match language {
        Language::Hindi => &[
            "आपातकालीन सहायता: 112",
            "पुलिस हेल्पलाइन: 100",
            "एम्बुलेंस: 102/108",
            "फायर ब्रिगेड: 101",
        ],
        Language::Bengali => &[
            "জরুরি সাহায্য: 112",
            "পুলিশ হেল্পলাইন: 100",
            "অ্যাম্বুলেন্স: 102/108",
            "ফায়ার ব্রিগেড: 101",
        ],
        Language::Tamil => &[
            "அவசர உதவி: 112",
            "காவல்துறை ஹெல்ப்லைன்: 100",
            "ஆம்புலன்ஸ்: 102/108",
            "தீயணைப்பு பிரிகேட்: 101",
        ],
        Language::Telugu => &[
            "అత్యవసర సహాయం: 112",
            "పోలీసు హెల్ప్‌లైన్: 100",
            "ఆంబులెన్స్: 102/108",
            "అగ్నిమాపక బ్రిగేడ్: 101",
        ],
        Language::Gujarati => &[
            "કટોકટી સહાય: 112",
            "પોલીસ હેલ્પલાઈન: 100",
            "એમ્બ્યુલન્સ: 102/108",
            "ફાયર બ્રિગેડ: 101",
        ],
        Language::Marathi => &[
            "आणीबाणी मदत: 112",
            "पोलीस हेल्पलाईन: 100",
            "एम्ब्युलन्स: 102/108",
            "फायर ब्रिगेड: 101",
        ],
        Language::Kannada => &[
            "ತುರ್ತು ಸಹಾಯ: 112",
            "ಪೊಲೀಸ್ ಹೆಲ್ಪ್‌ಲೈನ್: 100",
            "ಆಂಬ್ಯುಲೆನ್ಸ್: 102/108",
            "ಅಗ್ನಿಮಾಪಕ ಬ್ರಿಗೇಡ್: 101",
        ],
        Language::Malayalam => &[
            "അടിയന്തിര സഹായം: 112",
            "പോലീസ് ഹെൽപ്പ്‌ലൈൻ: 100",
            "ആംബുലൻസ്: 102/108",
            "ഫയർ ബ്രിഗേഡ്: 101",
        ],
        _ => &[],
    }
}
