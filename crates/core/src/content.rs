//! Static environmental facts, everyday tips and the quiz questions.

/// One multiple-choice question; option values are what gets submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub number: u32,
    pub prompt: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        number: 1,
        prompt: "How much plastic ends up in the oceans every year?",
        options: &[
            ("a", "About 1 million tonnes"),
            ("b", "About 8 million tonnes"),
            ("c", "About 50 million tonnes"),
        ],
    },
    QuizQuestion {
        number: 2,
        prompt: "What share of global greenhouse gas emissions comes from livestock?",
        options: &[("a", "3%"), ("b", "7%"), ("c", "14%")],
    },
    QuizQuestion {
        number: 3,
        prompt: "How much of the food produced worldwide is wasted?",
        options: &[("a", "About a third"), ("b", "About a tenth"), ("c", "About half")],
    },
    QuizQuestion {
        number: 4,
        prompt: "How much less energy does an LED bulb use than an incandescent one?",
        options: &[("a", "20% less"), ("b", "80% less"), ("c", "50% less")],
    },
    QuizQuestion {
        number: 5,
        prompt: "What share of global CO2 emissions comes from transport?",
        options: &[("a", "5%"), ("b", "12%"), ("c", "24%")],
    },
];

pub const FACTS: &[&str] = &[
    "A mature tree can absorb up to 22 kg of CO2 per year",
    "The oceans absorb about 30% of the CO2 produced by humanity",
    "An LED bulb uses 80% less energy than an incandescent bulb",
    "Recycling one tonne of paper saves 17 trees",
    "A French resident produces on average 590 kg of waste per year",
];

pub const TIPS: &[&str] = &[
    "Switch off devices on standby to save up to 10% on your electricity bill",
    "Prefer showers to baths: you will save up to 100 litres of water",
    "Compost your organic waste: it makes up 30% of our bins",
    "Use reusable bags: each one replaces up to 1000 plastic bags",
    "Eat local and seasonal food to cut the carbon footprint of your meals",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(FACTS.len(), 5);
        assert_eq!(TIPS.len(), 5);
        assert_eq!(QUESTIONS.len(), 5);
        assert!(FACTS.iter().chain(TIPS).all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn questions_are_numbered_in_order() {
        for (index, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.number as usize, index + 1);
            assert!(question.options.len() >= 2);
        }
    }
}
