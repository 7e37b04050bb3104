//! Multilingual keyword lexicon
//!
//! Per-category keyword sets in English, Hindi, Tamil, Telugu, Marathi,
//! Bengali, Gujarati, Kannada, Malayalam and Punjabi, plus the auxiliary cue
//! sets used for precedence and urgency escalation. All entries are lowercase
//! so they can be matched against lowercased text.

use janai_core::Category;

/// Auxiliary cue sets that adjust resolution without being categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueSet {
    /// Escalates a medical problem to critical
    EmergencyHealth,
    /// Escalates a transport problem to high
    TransportEmergency,
    /// A woman or girl is the subject
    WomenSubject,
    /// A harassment action is described
    WomenAction,
    /// Suppresses the women co-occurrence rule
    ChildExclusion,
}

/// Static keyword tables
pub struct Lexicon;

impl Lexicon {
    /// Keyword set for a category; `General` has none
    pub fn keywords(category: Category) -> &'static [&'static str] {
        match category {
            Category::Child => CHILD,
            Category::Women => WOMEN,
            Category::Police => POLICE,
            Category::Medical => MEDICAL,
            Category::Fire => FIRE,
            Category::Electricity => ELECTRICITY,
            Category::Water => WATER,
            Category::Transport => TRANSPORT,
            Category::General => &[],
        }
    }

    pub fn cues(set: CueSet) -> &'static [&'static str] {
        match set {
            CueSet::EmergencyHealth => EMERGENCY_HEALTH,
            CueSet::TransportEmergency => TRANSPORT_EMERGENCY,
            CueSet::WomenSubject => WOMEN_SUBJECT,
            CueSet::WomenAction => WOMEN_ACTION,
            CueSet::ChildExclusion => CHILD_EXCLUSION,
        }
    }
}

const CHILD: &[&str] = &[
    // English
    "child", "children", "kid", "kids", "baby", "infant", "minor", "child abuse",
    "child being", "child is", "kid abuse", "baby abuse", "child safety",
    "child protection", "missing child", "lost child", "child kidnap",
    "child trafficking", "child labor", "child labour", "boy", "girl working",
    "minor working", "underage work",
    // Hindi
    "बच्चा", "बच्चे", "बच्ची", "शिशु", "नाबालिग", "बच्चों का", "बाल", "बच्चे को",
    "बच्चे का", "बच्चा गुम", "बच्चा खो गया", "बाल मजदूरी", "बाल श्रम", "लड़का",
    "लड़की", "बच्चों से काम", "नाबालिग से काम",
    // Tamil
    "குழந்தை", "குழந்தைகள்", "சிறுவன்", "சிறுமி", "குழந்தை துன்புறுத்தல்",
    "குழந்தை பாதுகாப்பு",
    // Telugu
    "పిల్లలు", "పిల్లవాడు", "పిల్లవాళ్ళు", "శిశువు", "పిల్లల వేధింపులు", "పిల్లల భద్రత",
    // Marathi
    "मूल", "मुलगा", "मुलगी", "मुला", "मुली", "लहान", "मुलांचा", "मुलाचा", "मुलांची",
    "मुल हरवले", "मुलाला", "मुलांना", "मुलांचे शोषण",
    // Bengali
    "শিশু", "বাচ্চা", "ছেলে", "মেয়ে", "শিশু নির্যাতন", "শিশু সুরক্ষা", "হারিয়ে গেছে",
    // Gujarati
    "બાળક", "છોકરો", "છોકરી", "નાનું", "બાળ સુરક્ષા", "બાળકની સાથે",
    // Kannada
    "ಮಗು", "ಮಕ್ಕಳು", "ಹುಡುಗ", "ಹುಡುಗಿ", "ಮಕ್ಕಳ ಕಿರುಕುಳ", "ಮಕ್ಕಳ ಸುರಕ್ಷತೆ",
    // Malayalam
    "കുട്ടി", "കുട്ടികൾ", "കുഞ്ഞ്", "കുട്ടിയുടെ", "കുട്ടികളുടെ സുരക്ഷ",
    // Punjabi
    "ਬੱਚਾ", "ਬੱਚੇ", "ਮੁੰਡਾ", "ਕੁੜੀ", "ਬੱਚਿਆਂ ਦੀ", "ਬੱਚੇ ਦੀ",
];

const WOMEN: &[&str] = &[
    // English
    "women", "lady", "female", "harassment", "domestic violence", "domestic",
    "teasing", "molesting", "stalking", "eve-teasing", "assault", "threatening",
    "bothering", "troubling", "women abuse", "woman being",
    // Hindi
    "महिला", "लड़की", "स्त्री", "औरत", "परेशानी", "छेड़छाड़", "तंग", "दिक्कत",
    "परेशान", "सताना",
    // Tamil
    "பெண்", "பெண்கள்", "துன்புறுத்தல்", "தொல்லை", "கவலைப்படுத்தல்",
    // Telugu
    "మహిళ", "అమ్మాయి", "స్త్రీ", "వేధింపులు", "ఇబ్బంది", "ఇరుక్కు",
    // Marathi
    "मुलगी", "छळवणूक", "त्रास", "चिडवणूक",
    // Bengali
    "মহিলা", "মেয়ে", "নারী", "হয়রানি", "যন্ত্রণা", "বিরক্ত",
    // Gujarati
    "મહિલા", "છોકરી", "સ્ત્રી", "છેડતી", "તકલીફ", "પરેશાન",
    // Kannada
    "ಮಹಿಳೆ", "ಹುಡುಗಿ", "ಸ್ತ್ರೀ", "ಕಿರುಕುಳ", "ತೊಂದರೆ", "ಬೇಸರ",
    // Malayalam
    "സ്ത്രീ", "പെൺകുട്ടി", "ഉപദ്രവം", "ശല്യം", "ബുദ്ധിമുട്ട്",
    // Punjabi
    "ਔਰਤ", "ਕੁੜੀ", "ਤੰਗ", "ਪਰੇਸ਼ਾਨ", "ਦਿੱਕਤ",
];

const POLICE: &[&str] = &[
    // English
    "police", "theft", "crime", "robbery", "assault", "fraud", "stolen",
    // Hindi
    "पुलिस", "चोरी", "अपराध", "लूट", "हमला",
    // Tamil
    "காவல்துறை", "திருட்டு", "குற்றம்",
    // Telugu
    "పోలీసు", "దొంగతనం", "నేరం",
    // Marathi
    "पोलीस", "गुन्हा",
    // Bengali
    "পুলিশ", "চুরি", "অপরাধ",
    // Gujarati
    "પોલીસ", "ચોરી", "ગુનો",
    // Kannada
    "ಪೊಲೀಸ್", "ಕಳ್ಳತನ", "ಅಪರಾಧ",
    // Malayalam
    "പോലീസ്", "മോഷണം", "കുറ്റം",
    // Punjabi
    "ਪੁਲਿਸ", "ਚੋਰੀ", "ਅਪਰਾਧ",
];

const MEDICAL: &[&str] = &[
    // English
    "ambulance", "medical", "hospital", "doctor", "health", "injury",
    "fever", "unconscious", "bleeding", "heart attack",
    // Hindi
    "एम्बुलेंस", "अस्पताल", "डॉक्टर", "स्वास्थ्य", "चिकित्सा", "घायल", "बुखार", "बेहोश",
    // Tamil
    "ஆம்புலன்ஸ்", "மருத்துவமனை", "மருத்துவர்", "உடல்நலம்",
    // Telugu
    "అంబులెన్స్", "ఆసుపత్రి", "వైద్యుడు", "ఆరోగ్యం",
    // Marathi
    "रुग्णालय", "आरोग्य",
    // Bengali
    "অ্যাম্বুলেন্স", "হাসপাতাল", "ডাক্তার", "স্বাস্থ্য",
    // Gujarati
    "એમ્બ્યુલન્સ", "હોસ્પિટલ", "ડૉક્ટર", "આરોગ્ય",
    // Kannada
    "ಆಂಬ್ಯುಲೆನ್ಸ್", "ಆಸ್ಪತ್ರೆ", "ವೈದ್ಯ", "ಆರೋಗ್ಯ",
    // Malayalam
    "ആംബുലൻസ്", "ആശുപത്രി", "ഡോക്ടർ", "ആരോഗ്യം",
    // Punjabi
    "ਐਂਬੂਲੈਂਸ", "ਹਸਪਤਾਲ", "ਡਾਕਟਰ", "ਸਿਹਤ",
];

const FIRE: &[&str] = &[
    // English
    "fire", "burning", "smoke", "flame",
    // Hindi
    "आग", "जल रहा", "धुआं", "लपटें",
    // Tamil
    "தீ", "எரியும்", "புகை",
    // Telugu
    "అగ్ని", "మంటలు", "పొగ",
    // Marathi
    "जळत", "धूर",
    // Bengali
    "আগুন", "জ্বলছে", "ধোঁয়া",
    // Gujarati
    "આગ", "બળતું", "ધુમાડો",
    // Kannada
    "ಬೆಂಕಿ", "ಸುಡುತ್ತಿದೆ", "ಹೊಗೆ",
    // Malayalam
    "തീ", "കത്തുന്നു", "പുക",
    // Punjabi
    "ਅੱਗ", "ਸੜਦਾ", "ਧੂੰਆਂ",
];

const ELECTRICITY: &[&str] = &[
    // English
    "electricity", "power", "outage", "current", "voltage", "transformer",
    // Hindi
    "बिजली", "करंट", "पावर", "ट्रांसफार्मर", "बत्ती",
    // Tamil
    "மின்சாரம்", "மின்னல்", "கரெண்ட்",
    // Telugu
    "కరెంట్", "విద్యుత్", "పవర్",
    // Marathi
    "वीज", "पॉवर",
    // Bengali
    "বিদ্যুৎ", "কারেন্ট", "পাওয়ার",
    // Gujarati
    "વીજળી", "કરંટ", "પાવર",
    // Kannada
    "ವಿದ್ಯುತ್", "ಕರೆಂಟ್", "ಪವರ್",
    // Malayalam
    "വൈദ്യുതി", "കറന്റ്", "പവർ",
    // Punjabi
    "ਬਿਜਲੀ", "ਕਰੰਟ", "ਪਾਵਰ",
];

const WATER: &[&str] = &[
    // English
    "water", "supply", "sewerage", "drainage", "pipeline", "tap",
    // Hindi
    "पानी", "जल", "जल आपूर्ति", "सीवेज", "नल",
    // Tamil
    "தண்ணீர்", "நீர்", "குழாய்",
    // Telugu
    "నీరు", "నీటి సరఫరా", "కుళాయి",
    // Marathi
    "पाणी", "नळ",
    // Bengali
    "পানি", "জল", "নল",
    // Gujarati
    "પાણી", "જળ", "નળ",
    // Kannada
    "ನೀರು", "ಜಲ", "ನಲ್ಲಿ",
    // Malayalam
    "വെള്ളം", "ജലം", "കുഴൽ",
    // Punjabi
    "ਪਾਣੀ", "ਜਲ", "ਨਲ",
];

const TRANSPORT: &[&str] = &[
    // English
    "transport", "bus", "train", "railway", "taxi", "auto", "metro", "road",
    "travel", "highway", "vehicle", "accident", "breakdown",
    // Hindi
    "परिवहन", "बस", "ट्रेन", "रेलवे", "टैक्सी", "ऑटो", "मेट्रो", "सड़क", "यात्रा",
    "गाड़ी", "दुर्घटना",
    // Tamil
    "போக்குவரத்து", "பேருந்து", "ரயில்", "டாக்ஸி", "ஆட்டோ",
    // Telugu
    "రవాణా", "బస్సు", "రైలు", "టాక్సీ", "ఆటో",
    // Marathi
    "वाहतूक", "टॅक्सी",
    // Bengali
    "পরিবহন", "বাস", "ট্রেন", "ট্যাক্সি", "অটো",
    // Gujarati
    "પરિવહન", "બસ", "ટ્રેન", "ટેક્સી", "ઓટો",
    // Kannada
    "ಸಾರಿಗೆ", "ಬಸ್", "ರೈಲು", "ಟ್ಯಾಕ್ಸಿ", "ಆಟೋ",
    // Malayalam
    "ഗതാഗതം", "ബസ്", "ട്രെയിൻ", "ടാക്സി", "ഓട്ടോ",
    // Punjabi
    "ਆਵਾਜਾਈ", "ਬੱਸ", "ਰੇਲ", "ਟੈਕਸੀ", "ਆਟੋ",
];

const EMERGENCY_HEALTH: &[&str] = &[
    "emergency", "critical", "unconscious", "bleeding", "heart attack", "stroke",
    "accident", "injury",
    "आपातकाल", "गंभीर", "बेहोश", "खून बह रहा", "हार्ट अटैक", "स्ट्रोक", "दुर्घटना", "चोट",
    "அவசரம்", "கடுமையான", "உணர்வற்ற", "இரத்தம்", "இதய நோய்", "பக்கவாதம்", "விபத்து", "காயம்",
    "తక్షణం", "క్లిష్టమైన", "అపస్మారకం", "రక్తం", "గుండెపోటు", "పక్షవాతం", "ప్రమాదం", "గాయం",
    "জরুরি", "গুরুতর", "অচেতন", "রক্তপাত", "হার্ট অ্যাটাক", "স্ট্রোক", "দুর্ঘটনা", "আঘাত",
    "आणीबाणी", "बेशुद्ध", "रक्तस्त्राव", "हृदयविकार", "पक्षघात", "अपघात", "जखम",
];

const TRANSPORT_EMERGENCY: &[&str] = &[
    "accident", "breakdown", "stuck",
    "एक्सीडेंट", "दुर्घटना", "ब्रेकडाउन", "फंस गया",
    "விபத்து",
    "ప్రమాదం",
    "দুর্ঘটনা", "আটকে গেছে",
    "अपघात",
];

const WOMEN_SUBJECT: &[&str] = &["woman", "girl", "lady"];

const WOMEN_ACTION: &[&str] = &["teasing", "bothering", "troubling", "harassing"];

const CHILD_EXCLUSION: &[&str] = &["child", "children", "kid", "baby", "minor"];
