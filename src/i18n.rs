//! UI string tables, one per `Language`.
//!
//! Lookups never fail: a category id with no translation renders as the raw
//! identifier.

use crate::news::{CategoryFilter, Language};

/// Every user-facing string the UI renders for one language.
#[derive(Debug)]
pub struct UiStrings {
    pub app_name: &'static str,
    pub latest_news: &'static str,
    pub home: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub bookmarks: &'static str,
    pub settings: &'static str,
    pub all: &'static str,
    pub read_more: &'static str,
    pub source: &'static str,
    pub published: &'static str,
    pub no_bookmarks: &'static str,
    pub no_articles: &'static str,
    pub no_results: &'static str,
    pub saved: &'static str,
    pub removed: &'static str,
    pub refresh: &'static str,
    pub loading: &'static str,
    pub update_failed: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub about: &'static str,
    pub offline_mode: &'static str,
    pub live_mode: &'static str,
    pub summarize: &'static str,
    pub summary: &'static str,
    pub generating_summary: &'static str,
    pub failed_to_generate: &'static str,
    /// Category id → label. Ids not listed fall back to the id itself.
    pub categories: &'static [(&'static str, &'static str)],
}

/// String table for a language.
pub fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::English => &EN,
        Language::Hindi => &HI,
        Language::Tamil => &TA,
        Language::Telugu => &TE,
        Language::Malayalam => &ML,
        Language::Spanish => &ES,
        Language::French => &FR,
        Language::German => &DE,
        Language::Chinese => &ZH,
    }
}

/// Translated label for a category id, or the id itself when untranslated.
pub fn category_label<'a>(strings: &'static UiStrings, id: &'a str) -> &'a str {
    strings
        .categories
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}

/// Label for a strip entry, including the "All" sentinel.
pub fn filter_label(strings: &'static UiStrings, filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => strings.all,
        CategoryFilter::Only(category) => category_label(strings, category.as_str()),
    }
}

static EN: UiStrings = UiStrings {
    app_name: "Nexara",
    latest_news: "Latest News",
    home: "Home",
    search: "Search",
    search_placeholder: "Search news...",
    bookmarks: "Bookmarks",
    settings: "Settings",
    all: "All",
    read_more: "Read more",
    source: "Source",
    published: "Published",
    no_bookmarks: "No bookmarks yet",
    no_articles: "No articles found.",
    no_results: "No results found for",
    saved: "Saved to bookmarks",
    removed: "Removed from bookmarks",
    refresh: "Refresh",
    loading: "Loading news...",
    update_failed: "Failed to update news. Using cached.",
    language: "Language",
    theme: "Theme",
    about: "About",
    offline_mode: "Offline: showing sample articles",
    live_mode: "Live: headlines generated by Gemini",
    summarize: "Summarize",
    summary: "AI summary",
    generating_summary: "Generating summary...",
    failed_to_generate: "Failed to generate. Try again.",
    categories: &[
        ("General", "General"),
        ("Technology", "Technology"),
        ("Sports", "Sports"),
        ("Business", "Business"),
        ("Entertainment", "Entertainment"),
        ("Health", "Health"),
        ("Science", "Science"),
        ("Politics", "Politics"),
    ],
};

static HI: UiStrings = UiStrings {
    app_name: "नेक्सारा",
    latest_news: "ताज़ा खबरें",
    home: "होम",
    search: "खोजें",
    search_placeholder: "समाचार खोजें...",
    bookmarks: "बुकमार्क",
    settings: "सेटिंग्स",
    all: "सभी",
    read_more: "और पढ़ें",
    source: "स्रोत",
    published: "प्रकाशित",
    no_bookmarks: "अभी कोई बुकमार्क नहीं",
    no_articles: "कोई लेख नहीं मिला।",
    no_results: "इसके लिए कोई परिणाम नहीं",
    saved: "बुकमार्क में सहेजा गया",
    removed: "बुकमार्क से हटाया गया",
    refresh: "रीफ़्रेश",
    loading: "समाचार लोड हो रहे हैं...",
    update_failed: "समाचार अपडेट नहीं हो सके। पुराने समाचार दिखाए जा रहे हैं।",
    language: "भाषा",
    theme: "थीम",
    about: "जानकारी",
    offline_mode: "ऑफ़लाइन: नमूना लेख दिखाए जा रहे हैं",
    live_mode: "लाइव: Gemini द्वारा बनाई गई सुर्खियाँ",
    summarize: "सारांश बनाएं",
    summary: "एआई सारांश",
    generating_summary: "सारांश बनाया जा रहा है...",
    failed_to_generate: "बनाने में विफल। फिर से कोशिश करें।",
    categories: &[
        ("General", "सामान्य"),
        ("Technology", "प्रौद्योगिकी"),
        ("Sports", "खेल"),
        ("Business", "व्यापार"),
        ("Entertainment", "मनोरंजन"),
        ("Health", "स्वास्थ्य"),
        ("Science", "विज्ञान"),
        ("Politics", "राजनीति"),
    ],
};

static TA: UiStrings = UiStrings {
    app_name: "நெக்ஸாரா",
    latest_news: "சமீபத்திய செய்திகள்",
    home: "முகப்பு",
    search: "தேடல்",
    search_placeholder: "செய்திகளைத் தேடுங்கள்...",
    bookmarks: "புத்தகக்குறிகள்",
    settings: "அமைப்புகள்",
    all: "அனைத்தும்",
    read_more: "மேலும் படிக்க",
    source: "மூலம்",
    published: "வெளியிடப்பட்டது",
    no_bookmarks: "புத்தகக்குறிகள் இல்லை",
    no_articles: "கட்டுரைகள் எதுவும் இல்லை.",
    no_results: "இதற்கு முடிவுகள் இல்லை",
    saved: "புத்தகக்குறியில் சேமிக்கப்பட்டது",
    removed: "புத்தகக்குறியிலிருந்து நீக்கப்பட்டது",
    refresh: "புதுப்பி",
    loading: "செய்திகள் ஏற்றப்படுகின்றன...",
    update_failed: "செய்திகளைப் புதுப்பிக்க முடியவில்லை. சேமித்தவை காட்டப்படுகின்றன.",
    language: "மொழி",
    theme: "தீம்",
    about: "பற்றி",
    offline_mode: "ஆஃப்லைன்: மாதிரி கட்டுரைகள்",
    live_mode: "நேரலை: Gemini உருவாக்கிய தலைப்புகள்",
    summarize: "சுருக்கவும்",
    summary: "AI சுருக்கம்",
    generating_summary: "சுருக்கம் உருவாக்கப்படுகிறது...",
    failed_to_generate: "உருவாக்க முடியவில்லை. மீண்டும் முயலவும்.",
    categories: &[
        ("General", "பொது"),
        ("Technology", "தொழில்நுட்பம்"),
        ("Sports", "விளையாட்டு"),
        ("Business", "வணிகம்"),
        ("Entertainment", "பொழுதுபோக்கு"),
        ("Health", "ஆரோக்கியம்"),
        ("Science", "அறிவியல்"),
        ("Politics", "அரசியல்"),
    ],
};

static TE: UiStrings = UiStrings {
    app_name: "నెక్సారా",
    latest_news: "తాజా వార్తలు",
    home: "హోమ్",
    search: "శోధన",
    search_placeholder: "వార్తలను శోధించండి...",
    bookmarks: "బుక్‌మార్క్‌లు",
    settings: "సెట్టింగ్‌లు",
    all: "అన్నీ",
    read_more: "ఇంకా చదవండి",
    source: "మూలం",
    published: "ప్రచురించబడింది",
    no_bookmarks: "బుక్‌మార్క్‌లు లేవు",
    no_articles: "వ్యాసాలు ఏవీ లేవు.",
    no_results: "దీనికి ఫలితాలు లేవు",
    saved: "బుక్‌మార్క్‌లో సేవ్ చేయబడింది",
    removed: "బుక్‌మార్క్ నుండి తీసివేయబడింది",
    refresh: "రిఫ్రెష్",
    loading: "వార్తలు లోడ్ అవుతున్నాయి...",
    update_failed: "వార్తలను నవీకరించడం విఫలమైంది. పాత వార్తలు చూపబడుతున్నాయి.",
    language: "భాష",
    theme: "థీమ్",
    about: "గురించి",
    offline_mode: "ఆఫ్‌లైన్: నమూనా వ్యాసాలు",
    live_mode: "లైవ్: Gemini రూపొందించిన శీర్షికలు",
    summarize: "సారాంశం",
    summary: "AI సారాంశం",
    generating_summary: "సారాంశం రూపొందిస్తోంది...",
    failed_to_generate: "రూపొందించడం విఫలమైంది. మళ్లీ ప్రయత్నించండి.",
    categories: &[
        ("General", "సాధారణం"),
        ("Technology", "సాంకేతికం"),
        ("Sports", "క్రీడలు"),
        ("Business", "వ్యాపారం"),
        ("Entertainment", "వినోదం"),
        ("Health", "ఆరోగ్యం"),
        ("Science", "విజ్ఞానం"),
        ("Politics", "రాజకీయాలు"),
    ],
};

static ML: UiStrings = UiStrings {
    app_name: "നെക്സാര",
    latest_news: "പുതിയ വാർത്തകൾ",
    home: "ഹോം",
    search: "തിരയുക",
    search_placeholder: "വാർത്തകൾ തിരയുക...",
    bookmarks: "ബുക്ക്മാർക്കുകൾ",
    settings: "ക്രമീകരണങ്ങൾ",
    all: "എല്ലാം",
    read_more: "കൂടുതൽ വായിക്കുക",
    source: "ഉറവിടം",
    published: "പ്രസിദ്ധീകരിച്ചത്",
    no_bookmarks: "ബുക്ക്മാർക്കുകൾ ഇല്ല",
    no_articles: "ലേഖനങ്ങളൊന്നും ഇല്ല.",
    no_results: "ഫലങ്ങളൊന്നും ഇല്ല",
    saved: "ബുക്ക്മാർക്കിൽ സംരക്ഷിച്ചു",
    removed: "ബുക്ക്മാർക്കിൽ നിന്ന് നീക്കി",
    refresh: "പുതുക്കുക",
    loading: "വാർത്തകൾ ലോഡ് ചെയ്യുന്നു...",
    update_failed: "വാർത്തകൾ പുതുക്കാനായില്ല. പഴയ വാർത്തകൾ കാണിക്കുന്നു.",
    language: "ഭാഷ",
    theme: "തീം",
    about: "കുറിച്ച്",
    offline_mode: "ഓഫ്‌ലൈൻ: മാതൃകാ ലേഖനങ്ങൾ",
    live_mode: "ലൈവ്: Gemini സൃഷ്ടിച്ച തലക്കെട്ടുകൾ",
    summarize: "സംഗ്രഹിക്കുക",
    summary: "AI സംഗ്രഹം",
    generating_summary: "സംഗ്രഹം തയ്യാറാക്കുന്നു...",
    failed_to_generate: "സൃഷ്ടിക്കാനായില്ല. വീണ്ടും ശ്രമിക്കുക.",
    categories: &[
        ("General", "പൊതുവായ"),
        ("Technology", "സാങ്കേതികവിദ്യ"),
        ("Sports", "കായികം"),
        ("Business", "ബിസിനസ്"),
        ("Entertainment", "വിനോദം"),
        ("Health", "ആരോഗ്യം"),
        ("Science", "ശാസ്ത്രം"),
        ("Politics", "രാഷ്ട്രീയം"),
    ],
};

static ES: UiStrings = UiStrings {
    app_name: "Nexara",
    latest_news: "Últimas noticias",
    home: "Inicio",
    search: "Buscar",
    search_placeholder: "Buscar noticias...",
    bookmarks: "Guardados",
    settings: "Ajustes",
    all: "Todo",
    read_more: "Leer más",
    source: "Fuente",
    published: "Publicado",
    no_bookmarks: "Aún no hay guardados",
    no_articles: "No se encontraron artículos.",
    no_results: "Sin resultados para",
    saved: "Guardado en marcadores",
    removed: "Eliminado de marcadores",
    refresh: "Actualizar",
    loading: "Cargando noticias...",
    update_failed: "No se pudieron actualizar las noticias. Mostrando caché.",
    language: "Idioma",
    theme: "Tema",
    about: "Acerca de",
    offline_mode: "Sin conexión: artículos de ejemplo",
    live_mode: "En vivo: titulares generados por Gemini",
    summarize: "Resumir",
    summary: "Resumen IA",
    generating_summary: "Generando resumen...",
    failed_to_generate: "No se pudo generar. Inténtalo de nuevo.",
    categories: &[
        ("General", "General"),
        ("Technology", "Tecnología"),
        ("Sports", "Deportes"),
        ("Business", "Negocios"),
        ("Entertainment", "Entretenimiento"),
        ("Health", "Salud"),
        ("Science", "Ciencia"),
        ("Politics", "Política"),
    ],
};

static FR: UiStrings = UiStrings {
    app_name: "Nexara",
    latest_news: "Dernières nouvelles",
    home: "Accueil",
    search: "Rechercher",
    search_placeholder: "Rechercher des actualités...",
    bookmarks: "Favoris",
    settings: "Paramètres",
    all: "Tout",
    read_more: "Lire la suite",
    source: "Source",
    published: "Publié",
    no_bookmarks: "Aucun favori pour l'instant",
    no_articles: "Aucun article trouvé.",
    no_results: "Aucun résultat pour",
    saved: "Ajouté aux favoris",
    removed: "Retiré des favoris",
    refresh: "Actualiser",
    loading: "Chargement des actualités...",
    update_failed: "Échec de la mise à jour. Affichage du cache.",
    language: "Langue",
    theme: "Thème",
    about: "À propos",
    offline_mode: "Hors ligne : articles d'exemple",
    live_mode: "En direct : titres générés par Gemini",
    summarize: "Résumer",
    summary: "Résumé IA",
    generating_summary: "Génération du résumé...",
    failed_to_generate: "Échec de la génération. Réessayez.",
    categories: &[
        ("General", "Général"),
        ("Technology", "Technologie"),
        ("Sports", "Sports"),
        ("Business", "Économie"),
        ("Entertainment", "Divertissement"),
        ("Health", "Santé"),
        ("Science", "Science"),
        ("Politics", "Politique"),
    ],
};

static DE: UiStrings = UiStrings {
    app_name: "Nexara",
    latest_news: "Neueste Nachrichten",
    home: "Start",
    search: "Suche",
    search_placeholder: "Nachrichten suchen...",
    bookmarks: "Lesezeichen",
    settings: "Einstellungen",
    all: "Alle",
    read_more: "Weiterlesen",
    source: "Quelle",
    published: "Veröffentlicht",
    no_bookmarks: "Noch keine Lesezeichen",
    no_articles: "Keine Artikel gefunden.",
    no_results: "Keine Ergebnisse für",
    saved: "Zu Lesezeichen hinzugefügt",
    removed: "Aus Lesezeichen entfernt",
    refresh: "Aktualisieren",
    loading: "Nachrichten werden geladen...",
    update_failed: "Aktualisierung fehlgeschlagen. Zwischengespeicherte Nachrichten.",
    language: "Sprache",
    theme: "Design",
    about: "Über",
    offline_mode: "Offline: Beispielartikel",
    live_mode: "Live: von Gemini erzeugte Schlagzeilen",
    summarize: "Zusammenfassen",
    summary: "KI-Zusammenfassung",
    generating_summary: "Zusammenfassung wird erstellt...",
    failed_to_generate: "Erstellung fehlgeschlagen. Bitte erneut versuchen.",
    categories: &[
        ("General", "Allgemein"),
        ("Technology", "Technologie"),
        ("Sports", "Sport"),
        ("Business", "Wirtschaft"),
        ("Entertainment", "Unterhaltung"),
        ("Health", "Gesundheit"),
        ("Science", "Wissenschaft"),
        ("Politics", "Politik"),
    ],
};

static ZH: UiStrings = UiStrings {
    app_name: "Nexara",
    latest_news: "最新新闻",
    home: "首页",
    search: "搜索",
    search_placeholder: "搜索新闻...",
    bookmarks: "收藏",
    settings: "设置",
    all: "全部",
    read_more: "阅读更多",
    source: "来源",
    published: "发布时间",
    no_bookmarks: "暂无收藏",
    no_articles: "未找到文章。",
    no_results: "没有找到相关结果",
    saved: "已加入收藏",
    removed: "已取消收藏",
    refresh: "刷新",
    loading: "正在加载新闻...",
    update_failed: "新闻更新失败，显示缓存内容。",
    language: "语言",
    theme: "主题",
    about: "关于",
    offline_mode: "离线：显示示例文章",
    live_mode: "在线：Gemini 生成的头条",
    summarize: "总结",
    summary: "AI 摘要",
    generating_summary: "正在生成摘要...",
    failed_to_generate: "生成失败，请重试。",
    categories: &[
        ("General", "综合"),
        ("Technology", "科技"),
        ("Sports", "体育"),
        ("Business", "商业"),
        ("Entertainment", "娱乐"),
        ("Health", "健康"),
        ("Science", "科学"),
        ("Politics", "政治"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::Category;

    #[test]
    fn test_every_language_translates_every_category() {
        for language in Language::ALL {
            let table = strings(language);
            for category in Category::ALL {
                assert!(
                    table.categories.iter().any(|(k, _)| *k == category.as_str()),
                    "{} missing category {}",
                    language.code(),
                    category.as_str()
                );
            }
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_id() {
        assert_eq!(category_label(strings(Language::German), "World"), "World");
    }

    #[test]
    fn test_known_category_translated() {
        assert_eq!(
            category_label(strings(Language::Spanish), "Technology"),
            "Tecnología"
        );
    }

    #[test]
    fn test_filter_label_all() {
        assert_eq!(filter_label(strings(Language::French), CategoryFilter::All), "Tout");
        assert_eq!(
            filter_label(
                strings(Language::English),
                CategoryFilter::Only(Category::Health)
            ),
            "Health"
        );
    }

    #[test]
    fn test_no_empty_strings() {
        for language in Language::ALL {
            let s = strings(language);
            for value in [
                s.saved,
                s.removed,
                s.update_failed,
                s.loading,
                s.home,
                s.search,
                s.bookmarks,
                s.settings,
                s.summarize,
                s.summary,
                s.generating_summary,
                s.failed_to_generate,
            ] {
                assert!(!value.is_empty(), "empty string in {}", language.code());
            }
        }
    }
}
