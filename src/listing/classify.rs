use crate::models::Department;

/// Substring keywords per department, checked in declaration order.
///
/// The first department with any keyword contained in the normalized name
/// wins; names matching nothing fall through to Other. Meat and dairy come
/// before produce so that "chicken broth"-style compounds resolve by their
/// leading protein or dairy word rather than a vegetable mention.
pub static DEPARTMENT_KEYWORDS: &[(Department, &[&str])] = &[
    (
        Department::Meat,
        &[
            "chicken", "beef", "pork", "bacon", "sausage", "turkey", "ham", "lamb", "salmon",
            "shrimp", "tuna", "fish", "steak",
        ],
    ),
    (
        Department::Dairy,
        &[
            "milk", "butter", "cheese", "mozzarella", "yogurt", "cream", "egg",
        ],
    ),
    (
        Department::Produce,
        &[
            "onion", "garlic", "tomato", "potato", "carrot", "celery", "pepper", "spinach",
            "lettuce", "cucumber", "zucchini", "broccoli", "cauliflower", "mushroom", "avocado",
            "lemon", "lime", "apple", "banana", "ginger", "cilantro", "parsley", "basil", "corn",
            "peas", "kale", "berry", "berries", "grape", "orange", "herb",
        ],
    ),
    (
        Department::Pantry,
        &[
            "rice", "pasta", "bread", "flour", "sugar", "salt", "oil", "sauce", "vinegar",
            "honey", "oats", "bean", "lentil", "chickpea", "broth", "stock", "tortilla",
            "quinoa", "spice", "noodle",
        ],
    ),
];

/// Department for a normalized ingredient name. Pure function of the name;
/// every name lands in exactly one department.
pub fn classify_department(name: &str) -> Department {
    for (department, keywords) in DEPARTMENT_KEYWORDS {
        if keywords.iter().any(|kw| name.contains(kw)) {
            return *department;
        }
    }
    Department::Other
}
