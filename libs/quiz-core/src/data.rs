//! Built-in vocabulary set.
//!
//! Used as the default quiz pool and as the fallback pool for distractors.

use crate::types::{Level, VocabularyEntry};

const BUILT_IN: &[(&str, &str, Option<&str>, Level, &str)] = &[
    ("Xin chào", "Hello", Some("/həˈloʊ/"), Level::Basic, "Greetings"),
    ("Cảm ơn", "Thank you", Some("/θæŋk juː/"), Level::Basic, "Greetings"),
    ("Tạm biệt", "Goodbye", Some("/ɡʊdˈbaɪ/"), Level::Basic, "Greetings"),
    ("Tôi là sinh viên", "I am a student", None, Level::Basic, "Introduction"),
    ("Bạn khỏe không?", "How are you?", None, Level::Basic, "Greetings"),
    ("Xin lỗi", "Sorry", Some("/ˈsɒri/"), Level::Basic, "Greetings"),
    ("Nước", "Water", Some("/ˈwɔːtər/"), Level::Basic, "Food"),
    ("Cơm", "Rice", Some("/raɪs/"), Level::Basic, "Food"),
    ("Gia đình", "Family", Some("/ˈfæməli/"), Level::Basic, "Family"),
    ("Bạn bè", "Friends", Some("/frendz/"), Level::Basic, "Family"),
    ("Trường học", "School", Some("/skuːl/"), Level::Intermediate, "Education"),
    ("Thư viện", "Library", Some("/ˈlaɪbrəri/"), Level::Intermediate, "Education"),
    ("Bệnh viện", "Hospital", Some("/ˈhɒspɪtl/"), Level::Intermediate, "Places"),
    ("Sân bay", "Airport", Some("/ˈeəpɔːt/"), Level::Intermediate, "Travel"),
    ("Thời tiết", "Weather", Some("/ˈweðər/"), Level::Intermediate, "Nature"),
    ("Kinh nghiệm", "Experience", Some("/ɪkˈspɪəriəns/"), Level::Advanced, "Work"),
    ("Trách nhiệm", "Responsibility", None, Level::Advanced, "Work"),
    ("Phát triển bền vững", "Sustainable development", None, Level::Advanced, "Society"),
];

/// The built-in vocabulary, with ids "1".."n" in declaration order.
pub fn default_vocabulary() -> Vec<VocabularyEntry> {
    BUILT_IN
        .iter()
        .enumerate()
        .map(|(i, (native, target, pronunciation, level, category))| VocabularyEntry {
            id: (i + 1).to_string(),
            native: native.to_string(),
            target: target.to_string(),
            pronunciation: pronunciation.map(str::to_string),
            level: *level,
            category: category.to_string(),
        })
        .collect()
}
