use crate::model::{AppLanguage, Difficulty, QuestionType};

/// Tabla de textos de la interfaz; una instancia por idioma.
pub struct Locale {
    pub app_name: &'static str,

    // navegación
    pub nav_dashboard: &'static str,
    pub nav_generate: &'static str,
    pub nav_stats: &'static str,

    // panel principal
    pub subjects: &'static str,
    pub add_subject: &'static str,
    pub new_subject_hint: &'static str,
    pub add_chapter: &'static str,
    pub new_chapter_hint: &'static str,
    pub no_chapters: &'static str,
    pub recent_quizzes: &'static str,
    pub no_quizzes: &'static str,
    pub questions_word: &'static str,
    pub take_quiz: &'static str,
    pub unknown: &'static str,
    pub import_title: &'static str,
    pub import_hint: &'static str,
    pub import_button: &'static str,
    pub quiz_imported: &'static str,
    pub invalid_code: &'static str,

    // copias de seguridad
    pub export_data: &'static str,
    pub restore_data: &'static str,
    pub restore_hint: &'static str,
    pub confirm_restore: &'static str,
    pub data_saved: &'static str,
    pub data_restored: &'static str,
    pub cancel: &'static str,

    // generador
    pub quiz_architect: &'static str,
    pub upload_desc: &'static str,
    pub study_material: &'static str,
    pub paste_hint: &'static str,
    pub configuration: &'static str,
    pub quiz_title: &'static str,
    pub title_hint: &'static str,
    pub subject: &'static str,
    pub chapter: &'static str,
    pub difficulty: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub question_style: &'static str,
    pub mixed: &'static str,
    pub question_count: &'static str,
    pub mcq_ratio: &'static str,
    pub target_language: &'static str,
    pub lang_source: &'static str,
    pub lang_en: &'static str,
    pub lang_ar: &'static str,
    pub generate: &'static str,
    pub generating: &'static str,
    pub provide_text: &'static str,
    pub provide_title: &'static str,

    // runner
    pub question_word: &'static str,
    pub of_word: &'static str,
    pub insight: &'static str,
    pub next: &'static str,
    pub results: &'static str,
    pub completed: &'static str,
    pub score: &'static str,
    pub accuracy: &'static str,
    pub share_quiz: &'static str,
    pub link_copied: &'static str,
    pub back_dashboard: &'static str,
    pub view_stats: &'static str,
    pub quiz_not_found: &'static str,

    // estadísticas
    pub stats_title: &'static str,
    pub no_results: &'static str,
    pub quizzes_taken: &'static str,
    pub avg_accuracy: &'static str,
    pub by_subject: &'static str,
    pub attempts: &'static str,
    pub history: &'static str,
    pub date: &'static str,
    pub time_spent: &'static str,
}

pub const EN: Locale = Locale {
    app_name: "Med Quiz",

    nav_dashboard: "Dashboard",
    nav_generate: "Generate",
    nav_stats: "Stats",

    subjects: "Subjects",
    add_subject: "Add subject",
    new_subject_hint: "e.g. Pathology",
    add_chapter: "Add chapter",
    new_chapter_hint: "New chapter name",
    no_chapters: "No chapters yet",
    recent_quizzes: "Recent quizzes",
    no_quizzes: "No quizzes yet. Generate one from your study material.",
    questions_word: "questions",
    take_quiz: "Take quiz",
    unknown: "Unknown",
    import_title: "Import a shared quiz",
    import_hint: "Paste a share code here",
    import_button: "Import",
    quiz_imported: "Quiz imported successfully!",
    invalid_code: "Invalid code",

    export_data: "Backup",
    restore_data: "Restore",
    restore_hint: "Paste a backup JSON (or a file path on desktop)",
    confirm_restore: "Restoring replaces ALL current data. Continue?",
    data_saved: "Backup saved",
    data_restored: "Data restored",
    cancel: "Cancel",

    quiz_architect: "Quiz Architect",
    upload_desc: "Paste your study material and configure the quiz.",
    study_material: "Study material",
    paste_hint: "Paste lecture notes, a chapter, an article…",
    configuration: "Configuration",
    quiz_title: "Quiz title",
    title_hint: "e.g. Finals Prep",
    subject: "Subject",
    chapter: "Chapter",
    difficulty: "Difficulty",
    easy: "Easy",
    medium: "Medium",
    hard: "Hard",
    question_style: "Question style",
    mixed: "Mixed",
    question_count: "Questions",
    mcq_ratio: "MCQ ratio",
    target_language: "Quiz language",
    lang_source: "Same as source",
    lang_en: "English",
    lang_ar: "Arabic",
    generate: "Generate quiz",
    generating: "Generating…",
    provide_text: "Please provide some study text first.",
    provide_title: "Please provide a quiz title.",

    question_word: "Question",
    of_word: "of",
    insight: "Insight",
    next: "Next",
    results: "Results",
    completed: "Quiz completed!",
    score: "Score",
    accuracy: "Accuracy",
    share_quiz: "Share quiz",
    link_copied: "Share link copied to clipboard!",
    back_dashboard: "Back to dashboard",
    view_stats: "View stats",
    quiz_not_found: "Quiz not found",

    stats_title: "Performance",
    no_results: "No results yet. Finish a quiz to see your stats.",
    quizzes_taken: "Quizzes taken",
    avg_accuracy: "Average accuracy",
    by_subject: "By subject",
    attempts: "Attempts",
    history: "History",
    date: "Date",
    time_spent: "Time",
};

pub const AR: Locale = Locale {
    app_name: "اختبارات الطب",

    nav_dashboard: "الرئيسية",
    nav_generate: "إنشاء",
    nav_stats: "الإحصائيات",

    subjects: "المواد",
    add_subject: "إضافة مادة",
    new_subject_hint: "مثال: علم الأمراض",
    add_chapter: "إضافة فصل",
    new_chapter_hint: "اسم الفصل الجديد",
    no_chapters: "لا توجد فصول بعد",
    recent_quizzes: "الاختبارات الأخيرة",
    no_quizzes: "لا توجد اختبارات بعد. أنشئ واحداً من موادك الدراسية.",
    questions_word: "سؤال",
    take_quiz: "ابدأ الاختبار",
    unknown: "غير معروف",
    import_title: "استيراد اختبار مُشارَك",
    import_hint: "ألصق رمز المشاركة هنا",
    import_button: "استيراد",
    quiz_imported: "تم استيراد الاختبار بنجاح!",
    invalid_code: "رمز غير صالح",

    export_data: "نسخة احتياطية",
    restore_data: "استعادة",
    restore_hint: "ألصق ملف JSON الاحتياطي (أو مسار الملف على سطح المكتب)",
    confirm_restore: "الاستعادة تستبدل كل البيانات الحالية. هل تريد المتابعة؟",
    data_saved: "تم حفظ النسخة الاحتياطية",
    data_restored: "تمت استعادة البيانات",
    cancel: "إلغاء",

    quiz_architect: "منشئ الاختبارات",
    upload_desc: "ألصق موادك الدراسية واضبط إعدادات الاختبار.",
    study_material: "المادة الدراسية",
    paste_hint: "ألصق ملاحظات المحاضرة أو فصلاً أو مقالاً…",
    configuration: "الإعدادات",
    quiz_title: "عنوان الاختبار",
    title_hint: "مثال: مراجعة النهائي",
    subject: "المادة",
    chapter: "الفصل",
    difficulty: "الصعوبة",
    easy: "سهل",
    medium: "متوسط",
    hard: "صعب",
    question_style: "نوع الأسئلة",
    mixed: "مختلط",
    question_count: "عدد الأسئلة",
    mcq_ratio: "نسبة الاختيار من متعدد",
    target_language: "لغة الاختبار",
    lang_source: "نفس لغة النص",
    lang_en: "الإنجليزية",
    lang_ar: "العربية",
    generate: "إنشاء الاختبار",
    generating: "جارٍ الإنشاء…",
    provide_text: "يرجى إدخال نص دراسي أولاً.",
    provide_title: "يرجى إدخال عنوان للاختبار.",

    question_word: "السؤال",
    of_word: "من",
    insight: "توضيح",
    next: "التالي",
    results: "النتائج",
    completed: "اكتمل الاختبار!",
    score: "النتيجة",
    accuracy: "الدقة",
    share_quiz: "مشاركة الاختبار",
    link_copied: "تم نسخ رابط المشاركة!",
    back_dashboard: "العودة إلى الرئيسية",
    view_stats: "عرض الإحصائيات",
    quiz_not_found: "الاختبار غير موجود",

    stats_title: "الأداء",
    no_results: "لا توجد نتائج بعد. أكمل اختباراً لرؤية إحصائياتك.",
    quizzes_taken: "الاختبارات المُنجزة",
    avg_accuracy: "متوسط الدقة",
    by_subject: "حسب المادة",
    attempts: "المحاولات",
    history: "السجل",
    date: "التاريخ",
    time_spent: "الوقت",
};

pub fn t(lang: AppLanguage) -> &'static Locale {
    match lang {
        AppLanguage::En => &EN,
        AppLanguage::Ar => &AR,
    }
}

/// Fichas canónicas de verdadero/falso. Son cadenas de presentación y a la
/// vez clave de puntuación, igual que en el documento persistido.
pub fn tf_tokens(lang: AppLanguage) -> [&'static str; 2] {
    match lang {
        AppLanguage::En => ["True", "False"],
        AppLanguage::Ar => ["صح", "خطأ"],
    }
}

pub fn difficulty_label(t: &'static Locale, difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => t.easy,
        Difficulty::Medium => t.medium,
        Difficulty::Hard => t.hard,
    }
}

pub fn question_type_label(t: &'static Locale, qt: QuestionType) -> &'static str {
    match qt {
        QuestionType::Mcq => "MCQ",
        QuestionType::TrueFalse => "True/False",
        QuestionType::Mixed => t.mixed,
    }
}
