//! Common travel phrases used when the translation service is unreachable.

const PHRASES: &[(&str, &str, &str)] = &[
    ("ja", "Hello, how are you?", "こんにちは、お元気ですか？"),
    ("ja", "Where is the nearest train station?", "最寄りの駅はどこですか？"),
    ("ja", "I would like to order this, please.", "これを注文したいです。"),
    ("ja", "How much does this cost?", "これはいくらですか？"),
    ("ja", "Can you help me?", "手伝ってもらえますか？"),
    ("ja", "Thank you very much.", "どうもありがとうございます。"),
    ("es", "Hello, how are you?", "Hola, ¿cómo estás?"),
    ("es", "Where is the nearest train station?", "¿Dónde está la estación de tren más cercana?"),
    ("es", "I would like to order this, please.", "Me gustaría ordenar esto, por favor."),
    ("es", "How much does this cost?", "¿Cuánto cuesta esto?"),
    ("es", "Can you help me?", "¿Puede ayudarme?"),
    ("es", "Thank you very much.", "Muchas gracias."),
    ("fr", "Hello, how are you?", "Bonjour, comment allez-vous?"),
    ("fr", "Where is the nearest train station?", "Où est la gare la plus proche?"),
    ("fr", "I would like to order this, please.", "Je voudrais commander ceci, s'il vous plaît."),
    ("fr", "How much does this cost?", "Combien ça coûte?"),
    ("fr", "Can you help me?", "Pouvez-vous m'aider?"),
    ("fr", "Thank you very much.", "Merci beaucoup."),
];

/// Exact-match lookup; no normalisation of case or punctuation.
pub fn lookup(target_language: &str, text: &str) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(lang, phrase, _)| *lang == target_language && *phrase == text)
        .map(|(_, _, translation)| *translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_phrase() {
        assert_eq!(lookup("fr", "Thank you very much."), Some("Merci beaucoup."));
        assert_eq!(lookup("ja", "Can you help me?"), Some("手伝ってもらえますか？"));
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(lookup("fr", "thank you very much."), None);
        assert_eq!(lookup("de", "Thank you very much."), None);
        assert_eq!(lookup("es", "Good night"), None);
    }
}
