//! Статический двуязычный контент сайта.

use contracts::shared::Bilingual;

const fn t(ar: &'static str, en: &'static str) -> Bilingual {
    Bilingual::new(ar, en)
}

pub mod nav {
    use super::*;

    pub const HOME: Bilingual = t("الرئيسية", "Home");
    pub const DESTINATIONS: Bilingual = t("الوجهات", "Destinations");
    pub const GALLERY: Bilingual = t("المعرض", "Gallery");
    pub const ABOUT: Bilingual = t("من نحن", "About Us");
    pub const CONTACT: Bilingual = t("تواصل معنا", "Contact");
    pub const BOOK: Bilingual = t("احجز الآن", "Book Now");

    /// (path, label) in navbar order
    pub static LINKS: [(&str, Bilingual); 5] = [
        ("/", HOME),
        ("/destinations", DESTINATIONS),
        ("/gallery", GALLERY),
        ("/about", ABOUT),
        ("/contact", CONTACT),
    ];
}

pub struct HeroSlide {
    pub title: Bilingual,
    pub subtitle: Bilingual,
    pub cta: Bilingual,
    pub image: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: t("صنعاء القديمة", "Old City of Sana'a"),
        subtitle: t(
            "رحلة عبر الزمن في أقدم المدن المأهولة، حيث يحكي كل حجر قصة.",
            "A journey through time in one of the oldest inhabited cities, where every stone tells a story.",
        ),
        cta: t("احجز رحلتك", "Book Your Trip"),
        image: "/images/hero_background_1764603109548.webp",
    },
    HeroSlide {
        title: t("جزيرة سقطرى", "Socotra Island"),
        subtitle: t(
            "عالم آخر من الخيال، موطن شجرة دم الأخوين والطبيعة العذراء.",
            "Another world of imagination, home to the Dragon Blood Tree and pristine nature.",
        ),
        cta: t("استكشف الجزيرة", "Explore Island"),
        image: "/images/socotra_dragon_tree_1764603178352.webp",
    },
    HeroSlide {
        title: t("شيبام حضرموت", "Shibam Hadramout"),
        subtitle: t(
            "مانهاتن الصحراء، أول ناطحات سحاب في التاريخ تعانق السماء.",
            "The Manhattan of the Desert, history's first skyscrapers embracing the sky.",
        ),
        cta: t("خطط لزيارتك", "Plan Visit"),
        image: "/images/shibam_hadramout_1764603231216.webp",
    },
];

pub mod about {
    use super::*;

    pub const TITLE: Bilingual = t("مرحباً بكم في جواهر اليمن", "Welcome to Yemen Gems");
    pub const SUBTITLE: Bilingual = t("بوابتك لاكتشاف أرض السعيدة", "Your Gateway to Arabia Felix");
    pub const DESCRIPTION: Bilingual = t(
        "نحن أكثر من مجرد وكالة سياحية؛ نحن سفراء لجمال اليمن وتاريخه العريق.",
        "We are more than just a travel agency; we are ambassadors of Yemen's beauty and ancient history.",
    );
    pub const CTA: Bilingual = t("اقرأ قصتنا الكاملة", "Read Our Full Story");

    pub const MISSION: (Bilingual, Bilingual) = (
        t("رسالتنا", "Our Mission"),
        t(
            "تقديم تجربة سياحية استثنائية تبرز الوجه المشرق لليمن، مع الحفاظ على التراث الثقافي والبيئي.",
            "To provide an exceptional tourism experience that highlights the bright side of Yemen, while preserving cultural and environmental heritage.",
        ),
    );
    pub const VISION: (Bilingual, Bilingual) = (
        t("رؤيتنا", "Our Vision"),
        t(
            "أن نكون الخيار الأول للسياح الباحثين عن المغامرة والأصالة في الشرق الأوسط.",
            "To be the first choice for tourists seeking adventure and authenticity in the Middle East.",
        ),
    );
    pub const VALUES_TITLE: Bilingual = t("قيمنا", "Our Values");
    pub static VALUES: [(Bilingual, Bilingual); 3] = [
        (
            t("الأصالة", "Authenticity"),
            t("نقدم تجارب تعكس الثقافة اليمنية الحقيقية.", "We offer experiences that reflect true Yemeni culture."),
        ),
        (
            t("الأمان", "Safety"),
            t("سلامة ضيوفنا هي أولويتنا القصوى.", "The safety of our guests is our top priority."),
        ),
        (
            t("الاستدامة", "Sustainability"),
            t(
                "نلتزم بالسياحة المسؤولة التي تحمي البيئة.",
                "We are committed to responsible tourism that protects the environment.",
            ),
        ),
    ];
}

pub struct Destination {
    pub id: u32,
    pub name: Bilingual,
    pub description: Bilingual,
    pub story: Bilingual,
    pub image: &'static str,
}

pub mod destinations {
    use super::*;

    pub const TITLE: Bilingual = t("وجهات ساحرة", "Enchanting Destinations");
    pub const SUBTITLE: Bilingual = t(
        "استكشف أجمل المناطق السياحية في اليمن",
        "Explore the most beautiful tourist spots in Yemen",
    );
    pub const DISCOVER: Bilingual = t("اكتشف", "Discover");
    pub const CLOSE: Bilingual = t("إغلاق", "Close");
}

pub static DESTINATIONS: [Destination; 6] = [
    Destination {
        id: 5,
        name: t("ميناء المكلا", "Al-Mukalla Harbor"),
        description: t(
            "عروس البحر العربي، حيث يلتقي التاريخ بجمال الشاطئ.",
            "The Bride of the Arabian Sea, where history meets coastal beauty.",
        ),
        story: t(
            "المكلا، عاصمة حضرموت الساحلية، تتميز بقنواتها المائية ومبانيها البيضاء الناصعة.",
            "Al-Mukalla, the coastal capital of Hadramout, is distinguished by its canals and pristine white buildings.",
        ),
        image: "/images/almukalla_harbor_1764603566692.webp",
    },
    Destination {
        id: 2,
        name: t("صنعاء القديمة", "Old City of Sana'a"),
        description: t(
            "مدينة سام، أقدم المدن المأهولة في العالم بمعمارها الفريد.",
            "The city of Sam, one of the oldest inhabited cities with unique architecture.",
        ),
        story: t(
            "صنعاء، إحدى أقدم المدن المأهولة باستمرار في العالم، يعود تاريخها إلى أكثر من 2500 عام.",
            "Sana'a, one of the oldest continuously inhabited cities in the world, dates back over 2,500 years.",
        ),
        image: "/images/hero_background_1764603109548.webp",
    },
    Destination {
        id: 3,
        name: t("شيبام حضرموت", "Shibam Hadramout"),
        description: t(
            "مانهاتن الصحراء، أول ناطحات سحاب طينية في العالم.",
            "The Manhattan of the Desert, the world's first mud-brick skyscrapers.",
        ),
        story: t(
            "شيبام هي أعجوبة معمارية تعود للقرن السادس عشر.",
            "Shibam is a 16th-century architectural marvel.",
        ),
        image: "/images/shibam_hadramout_1764603231216.webp",
    },
    Destination {
        id: 4,
        name: t("ساحل عدن", "Aden Coast"),
        description: t(
            "شواطئ ذهبية ومياه فيروزية في قلب فوهة بركانية قديمة.",
            "Golden beaches and turquoise waters in the heart of an ancient volcanic crater.",
        ),
        story: t(
            "عدن، الميناء التاريخي الاستراتيجي، تقع داخل فوهة بركان خامد.",
            "Aden, the strategic historic port, lies within a dormant volcanic crater.",
        ),
        image: "/images/aden_coast_1764603413447.webp",
    },
    Destination {
        id: 6,
        name: t("ميناء المخا", "Port of Mocha"),
        description: t(
            "مهد القهوة للعالم، مدينة تاريخية عريقة على البحر الأحمر.",
            "The cradle of coffee to the world, an ancient historic city on the Red Sea.",
        ),
        story: t(
            "المخا هو الميناء الذي أعطى قهوة \"الموكا\" اسمها.",
            "Mocha is the port that gave \"Mocha\" coffee its name.",
        ),
        image: "/images/mocha_coffee_port_1764603806013.webp",
    },
    Destination {
        id: 1,
        name: t("جزيرة سقطرى", "Socotra Island"),
        description: t(
            "جوهرة المحيط الهندي، موطن شجرة دم الأخوين والطبيعة النادرة.",
            "The jewel of the Indian Ocean, home to the Dragon Blood Tree and rare nature.",
        ),
        story: t(
            "تُعرف سقطرى بأنها \"غالاباغوس المحيط الهندي\".",
            "Known as the \"Galapagos of the Indian Ocean\", Socotra evolved flora and fauna found nowhere else on Earth.",
        ),
        image: "/images/socotra_dragon_tree_1764603178352.webp",
    },
];

pub fn find_destination(id: u32) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

pub mod gallery {
    use super::*;

    pub const TITLE: Bilingual = t("معرض الصور", "Photo Gallery");
    pub const SUBTITLE: Bilingual = t(
        "استكشف جمال اليمن بعدسة فنية",
        "Explore the beauty of Yemen through an artistic lens",
    );
}

pub struct TravelTip {
    pub title: Bilingual,
    pub content: Bilingual,
    pub icon: &'static str,
}

pub mod tips {
    use super::*;

    pub const TITLE: Bilingual = t("نصائح للمسافرين", "Traveler Tips");
    pub const SUBTITLE: Bilingual = t(
        "كل ما تحتاج معرفته قبل زيارتك",
        "Everything you need to know before your visit",
    );
}

pub static TRAVEL_TIPS: [TravelTip; 6] = [
    TravelTip {
        title: t("أفضل وقت للزيارة", "Best Time to Visit"),
        content: t(
            "من أكتوبر إلى أبريل حيث يكون الطقس معتدلاً ومناسباً للاستكشاف.",
            "From October to April when the weather is mild and perfect for exploration.",
        ),
        icon: "📅",
    },
    TravelTip {
        title: t("العملة المحلية", "Local Currency"),
        content: t(
            "الريال اليمني هو العملة الرسمية. يفضل حمل النقد دائماً.",
            "The Yemeni Rial is the official currency. It is always best to carry cash.",
        ),
        icon: "💵",
    },
    TravelTip {
        title: t("الملابس المناسبة", "Dress Code"),
        content: t(
            "ينصح بارتداء ملابس محتشمة ومريحة تناسب العادات المحلية.",
            "Modest and comfortable clothing respecting local customs is recommended.",
        ),
        icon: "👕",
    },
    TravelTip {
        title: t("التنقل والمواصلات", "Transportation"),
        content: t(
            "استئجار سيارة مع سائق محلي هو الخيار الأفضل والأكثر أماناً.",
            "Hiring a car with a local driver is the best and safest option.",
        ),
        icon: "🚗",
    },
    TravelTip {
        title: t("الطعام والشراب", "Food & Drink"),
        content: t(
            "جرب المندي والسلتة. اشرب المياه المعبأة فقط.",
            "Try Mandi and Saltah. Drink only bottled water.",
        ),
        icon: "🍲",
    },
    TravelTip {
        title: t("التصوير", "Photography"),
        content: t(
            "استأذن دائماً قبل تصوير السكان المحليين، خاصة النساء.",
            "Always ask for permission before photographing locals, especially women.",
        ),
        icon: "📷",
    },
];

pub mod contact {
    use super::*;

    pub const TAGLINE: Bilingual = t("✨ دعنا نخطط لمغامرتك", "✨ Let's Plan Your Adventure");
    pub const TITLE: Bilingual = t("تواصل معنا", "Get in Touch");
    pub const SUBTITLE: Bilingual = t(
        "نحن هنا لتحويل حلمك إلى رحلة لا تُنسى",
        "We're here to turn your dream into an unforgettable journey",
    );
    pub const ADDRESS: Bilingual = t("شارع حدة، صنعاء، اليمن", "Haddah Street, Sana'a, Yemen");
    pub const PHONE: &str = "+7 999 984 6073";
    pub const EMAIL: &str = "sadeqeissa@gmail.com";
    pub const MAPS_URL: &str =
        "https://www.google.com/maps/search/?api=1&query=Haddah+Street,+Sana'a,+Yemen";

    pub const STEP_OF: Bilingual = t("الخطوة", "Step");
    pub const NAME_QUESTION: Bilingual = t("👋 ما هو اسمك؟", "👋 What's your name?");
    pub const NAME_PLACEHOLDER: Bilingual = t("أدخل اسمك الكامل", "Enter your full name");
    pub const EMAIL_QUESTION: Bilingual = t("📧 كيف يمكننا التواصل معك؟", "📧 How can we reach you?");
    pub const EMAIL_PLACEHOLDER: Bilingual = t("اسمك@example.com", "your@email.com");
    pub const INTERESTS_QUESTION: Bilingual = t("🌍 ما الذي يثير اهتمامك؟", "🌍 What interests you?");
    pub const INTERESTS_HINT: Bilingual = t("اختر واحدة أو أكثر", "Choose one or more");
    pub const MESSAGE_QUESTION: Bilingual = t("💭 أخبرنا المزيد...", "💭 Tell us more...");
    pub const MESSAGE_PLACEHOLDER: Bilingual = t("اكتب رسالتك هنا...", "Write your message here...");
    pub const BACK: Bilingual = t("السابق", "Back");
    pub const NEXT: Bilingual = t("التالي", "Next");
    pub const SUBMIT: Bilingual = t("إرسال الرسالة", "Send Message");
    pub const SENDING: Bilingual = t("جاري الإرسال...", "Sending...");
    pub const SUCCESS: Bilingual = t(
        "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.",
        "Your message has been sent! We'll get back to you soon.",
    );
}

pub struct Faq {
    pub question: Bilingual,
    pub answer: Bilingual,
}

pub const FAQ_TITLE: Bilingual = t("الأسئلة الشائعة", "Frequently Asked Questions");

pub static FAQS: [Faq; 4] = [
    Faq {
        question: t("هل اليمن آمن للسياحة؟", "Is Yemen safe for tourism?"),
        answer: t(
            "نعم، هناك مناطق آمنة تماماً للسياحة مثل جزيرة سقطرى وحضرموت والمهرة.",
            "Yes, there are completely safe areas for tourism like Socotra Island, Hadramout, and Al-Mahrah.",
        ),
    },
    Faq {
        question: t("كيف يمكنني الحصول على التأشيرة؟", "How can I get a visa?"),
        answer: t(
            "نحن نساعدك في استخراج التأشيرة السياحية، وتستغرق العملية حوالي أسبوع.",
            "We assist you in obtaining a tourist visa; the process takes about one week.",
        ),
    },
    Faq {
        question: t("ما هي العملة المستخدمة؟", "What is the currency used?"),
        answer: t(
            "الريال اليمني. يفضل إحضار الدولار الأمريكي (طبعة جديدة) للصرف.",
            "The Yemeni Rial. It is preferred to bring US Dollars (new print) for exchange.",
        ),
    },
    Faq {
        question: t("هل تتوفر خدمة الإنترنت؟", "Is internet service available?"),
        answer: t(
            "نعم، تتوفر خدمة الإنترنت 4G في معظم المدن الرئيسية، والإنترنت الفضائي في سقطرى.",
            "Yes, 4G internet service is available in most major cities, and satellite internet in Socotra.",
        ),
    },
];

/// Раздел юридической страницы
pub struct LegalSection {
    pub icon: &'static str,
    pub title: Bilingual,
    pub content: Bilingual,
}

pub mod legal {
    use super::*;

    pub const PRIVACY_TITLE: Bilingual = t("سياسة الخصوصية", "Privacy Policy");
    pub const TERMS_TITLE: Bilingual = t("الشروط والأحكام", "Terms & Conditions");
    pub const LAST_UPDATED: Bilingual = t("آخر تحديث: 2025", "Last updated: 2025");

    pub static PRIVACY: [LegalSection; 4] = [
        LegalSection {
            icon: "🛡️",
            title: t("جمع البيانات", "Data Collection"),
            content: t(
                "نقوم بجمع المعلومات التي تقدمها لنا مباشرة عند الحجز أو الاتصال بنا.",
                "We collect information you provide directly when booking or contacting us.",
            ),
        },
        LegalSection {
            icon: "👁️",
            title: t("استخدام البيانات", "Data Usage"),
            content: t(
                "نستخدم معلوماتك لتوفير وتحسين خدماتنا والتواصل معك بشأن رحلاتك.",
                "We use your information to provide and improve our services and to communicate about your trips.",
            ),
        },
        LegalSection {
            icon: "👥",
            title: t("مشاركة البيانات", "Data Sharing"),
            content: t(
                "لا نبيع معلوماتك الشخصية.",
                "We do not sell your personal information.",
            ),
        },
        LegalSection {
            icon: "✉️",
            title: t("حقوقك", "Your Rights"),
            content: t(
                "لديك الحق في الوصول إلى بياناتك الشخصية وتصحيحها وحذفها.",
                "You have the right to access, correct, and delete your personal data.",
            ),
        },
    ];

    pub static TERMS: [LegalSection; 4] = [
        LegalSection {
            icon: "📜",
            title: t("قبول الشروط", "Acceptance of Terms"),
            content: t(
                "باستخدام موقعنا وخدماتنا، فإنك توافق على الالتزام بهذه الشروط والأحكام.",
                "By using our website and services, you agree to be bound by these Terms and Conditions.",
            ),
        },
        LegalSection {
            icon: "💳",
            title: t("الحجز والدفع", "Booking and Payment"),
            content: t(
                "جميع الحجوزات تخضع للتوافر. الأسعار قابلة للتغيير دون إشعار مسبق.",
                "All bookings are subject to availability. Prices are subject to change without prior notice.",
            ),
        },
        LegalSection {
            icon: "↩️",
            title: t("الإلغاء والاسترداد", "Cancellation and Refunds"),
            content: t(
                "الإلغاءات قبل 30 يومًا من تاريخ السفر قد تكون مؤهلة لاسترداد كامل.",
                "Cancellations made 30+ days before travel date may be eligible for full refund.",
            ),
        },
        LegalSection {
            icon: "⚖️",
            title: t("حدود المسؤولية", "Limitation of Liability"),
            content: t(
                "مسؤوليتنا محدودة بالمبلغ المدفوع مقابل الخدمة.",
                "Our liability is limited to the amount paid for the service.",
            ),
        },
    ];
}

pub mod not_found {
    use super::*;

    pub const TITLE: Bilingual = t("الصفحة غير موجودة", "Page Not Found");
    pub const BODY: Bilingual = t(
        "عذراً، الصفحة التي تبحث عنها غير موجودة.",
        "Sorry, the page you are looking for does not exist.",
    );
    pub const BACK_HOME: Bilingual = t("العودة للرئيسية", "Back to Home");
}

pub mod footer {
    use super::*;

    pub const ABOUT: Bilingual = t("جواهر اليمن", "Yemen Gems");
    pub const DESCRIPTION: Bilingual = t(
        "بوابتك الأولى لاستكشاف جمال وتاريخ وحضارة اليمن السعيد.",
        "Your premier gateway to exploring the beauty, history, and civilization of Yemen.",
    );
    pub const QUICK_LINKS: Bilingual = t("روابط سريعة", "Quick Links");
    pub const CONTACT: Bilingual = t("تواصل معنا", "Contact Us");
    pub const COPYRIGHT: Bilingual = t(
        "© 2025 جواهر اليمن. جميع الحقوق محفوظة.",
        "© 2025 Yemen Gems. All rights reserved.",
    );
}

pub mod social {
    pub const WHATSAPP: &str = "https://wa.me/79999846073";
    pub const INSTAGRAM: &str = "https://instagram.com";
    pub const FACEBOOK: &str = "https://facebook.com";
    pub const TWITTER: &str = "https://twitter.com";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_destination_ids_unique_and_findable() {
        let ids: HashSet<u32> = DESTINATIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DESTINATIONS.len());
        assert_eq!(find_destination(1).map(|d| d.name.en), Some("Socotra Island"));
        assert!(find_destination(42).is_none());
    }

    #[test]
    fn test_nav_links_are_absolute_paths() {
        assert!(nav::LINKS.iter().all(|(path, _)| path.starts_with('/')));
    }
}
