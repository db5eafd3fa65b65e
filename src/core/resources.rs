// canned text the bot picks from

pub const GENERAL: &[&str] = &[
    "Remember to practice self-care: eat well, exercise, and get enough sleep.",
    "Deep breathing exercises can help manage stress in the moment.",
    "Journaling can be a helpful way to process your thoughts and feelings.",
    "Consider reaching out to a mental health professional for additional support.",
];

pub const ANXIETY: &[&str] = &[
    "Try the 5-4-3-2-1 grounding technique: acknowledge 5 things you see, 4 things you can touch, 3 things you hear, 2 things you smell, and 1 thing you taste.",
    "Progressive muscle relaxation can help reduce physical tension from anxiety.",
    "Limiting caffeine and alcohol can help reduce anxiety symptoms.",
];

pub const DEPRESSION: &[&str] = &[
    "Even small accomplishments matter. Try breaking tasks into smaller steps.",
    "Exposure to sunlight and nature can help improve mood.",
    "Regular exercise, even just a short walk, can help release endorphins.",
];

pub const ANGER: &[&str] = &[
    "Taking a brief time-out can help you respond more calmly.",
    "Physical activity can be a healthy outlet for frustration.",
    "Try to identify what's beneath your anger - often there are other emotions underneath.",
];

pub const LONELINESS: &[&str] = &[
    "Consider joining community groups or classes to meet new people.",
    "Volunteering can be a fulfilling way to connect with others.",
    "Digital connections count too - reach out to friends or family, even virtually.",
];

pub const GRIEF: &[&str] = &[
    "Grief has no timeline. Be patient with yourself.",
    "Maintaining routines can provide stability during difficult times.",
    "Consider joining a grief support group to connect with others who understand.",
];

pub const TRAUMA: &[&str] = &[
    "Grounding techniques can help when you're experiencing flashbacks.",
    "Trauma-informed therapy approaches like EMDR can be helpful.",
    "Establish safety routines that help you feel secure in your environment.",
];

pub const CRISIS: &[&str] = &[
    "If you're in immediate danger, please call emergency services (911 in the US).",
    "National Suicide Prevention Lifeline: 988 or 1-800-273-8255 (US)",
    "Crisis Text Line: Text HOME to 741741 (US)",
    "International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/",
];

pub const CRISIS_OPENING: &str =
    "I'm concerned about what you've shared. Your safety is important.";

pub const CRISIS_PROMPT: &str =
    "Would it be possible for you to reach out to one of these resources now?";

// shown by front ends after every turn once crisis has been flagged
pub const CRISIS_REMINDER: [&str; 2] = [
    "I strongly encourage you to reach out to one of the crisis resources I mentioned.",
    "Would you like me to provide those resources again?",
];

pub const SUPPORTIVE: &[&str] = &[
    "I hear that you're going through a difficult time.",
    "That sounds really challenging. Thank you for sharing that with me.",
    "I appreciate you opening up about this.",
    "It takes courage to talk about these feelings.",
    "You're not alone in feeling this way.",
    "Your feelings are valid.",
    "It makes sense that you would feel that way given what you're experiencing.",
];

pub const FOLLOW_UPS: &[&str] = &[
    "How long have you been feeling this way?",
    "Have you talked to anyone else about this?",
    "What has helped you cope with similar feelings in the past?",
    "On a scale of 1-10, how intense would you say these feelings are?",
    "Is there anything specific that triggered these feelings?",
    "What would be a small step that might help you feel better right now?",
    "Have you considered speaking with a mental health professional?",
    "What kind of support would be most helpful for you right now?",
];

// {name} gets swapped for the bot name
pub const GREETINGS: &[&str] = &[
    "Hello! I'm {name}, a mental health support chatbot. How are you feeling today?",
    "Hi there! I'm {name} and I'm here to provide support. How can I help you today?",
    "Welcome! I'm {name}. I'm here to listen and offer support. What's on your mind?",
];

pub const FAREWELLS: &[&str] = &[
    "Take care of yourself. Remember, it's okay to reach out for help when needed.",
    "I hope our conversation has been helpful. Be gentle with yourself.",
    "Thank you for talking with me today. Remember that seeking support is a sign of strength.",
    "Wishing you well. Please don't hesitate to reach out again if you need support.",
];

pub const EXIT_KEYWORDS: &[&str] = &["bye", "goodbye", "exit", "quit", "end", "stop"];
