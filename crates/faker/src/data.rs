//! Word lists the generators draw from.

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amelia", "Arthur", "Beatrice", "Benjamin", "Camila", "Charles", "Chloe",
    "Daniel", "Delia", "Edgar", "Elena", "Felix", "Fiona", "Gabriel", "Grace", "Hannah", "Hugo",
    "Iris", "Isaac", "Jasper", "Julia", "Kai", "Keira", "Leo", "Lucia", "Malik", "Maya", "Nadia",
    "Noah", "Olive", "Oscar", "Priya", "Quentin", "Rosa", "Rowan", "Sofia", "Theo", "Uma",
    "Victor", "Willa", "Xavier", "Yara", "Zane",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Becker", "Carter", "Dalton", "Ellison", "Fischer", "Garcia", "Hartmann", "Ibarra",
    "Jensen", "Kowalski", "Larsen", "Morales", "Nakamura", "Okafor", "Patel", "Quinn", "Romero",
    "Schmidt", "Thompson", "Underwood", "Vasquez", "Whitaker", "Xu", "Yamamoto", "Zimmerman",
];

pub const GENDERS: &[&str] = &[
    "Female", "Male", "Non-binary", "Agender", "Genderfluid", "Bigender", "Two-spirit",
];

pub const JOB_DESCRIPTORS: &[&str] = &[
    "Lead", "Senior", "Direct", "Corporate", "Dynamic", "Future", "Product", "National",
    "Regional", "District", "Central", "Global", "Customer", "Investor", "Internal", "Principal",
];

pub const JOB_AREAS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Directives",
    "Implementation", "Integration", "Functionality", "Response", "Paradigm", "Tactics",
    "Identity", "Markets", "Communications", "Creative", "Data", "Infrastructure",
];

pub const JOB_TYPES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Orchestrator", "Technician", "Developer", "Producer", "Consultant",
];

pub const BIO_NOUNS: &[&str] = &[
    "coffee lover", "developer", "musician", "traveler", "gamer", "photographer", "writer",
    "gardener", "film buff", "runner", "teacher", "dreamer", "cat person", "baker",
];

pub const BIO_EMOJI: &[&str] = &["🌻", "🎸", "☕", "🚀", "📚", "🌊", "🎨", "🐾", "⛰️", "✨"];

pub const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const PHONE_FORMATS: &[&str] = &["(###) ###-####", "###-###-####", "###.###.####", "1-###-###-####"];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Willow", "Birch", "Hillcrest", "Lakeview", "Sunset",
    "Meadow", "River", "Spring", "Highland", "Park", "Church", "Mill", "Station",
];

pub const CITY_PREFIXES: &[&str] = &["North", "South", "East", "West", "New", "Port", "Lake", "Fort"];

pub const CITY_SUFFIXES: &[&str] = &[
    "ville", "berg", "borough", "burgh", "chester", "field", "haven", "land", "mouth", "port",
    "side", "stad", "ton", "view", "worth",
];

pub const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "California", "Colorado", "Delaware", "Florida", "Georgia",
    "Idaho", "Illinois", "Kansas", "Maine", "Michigan", "Montana", "Nevada", "New Mexico",
    "New York", "Ohio", "Oregon", "Texas", "Utah", "Vermont", "Washington", "Wyoming",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Brazil", "Canada", "Chile", "Denmark", "Egypt",
    "Finland", "France", "Germany", "Ghana", "India", "Ireland", "Italy", "Japan", "Kenya",
    "Mexico", "Netherlands", "New Zealand", "Norway", "Peru", "Portugal", "Spain", "Sweden",
    "Thailand", "United Kingdom", "United States of America", "Vietnam",
];

pub const TIME_ZONES: &[&str] = &[
    "America/New_York", "America/Chicago", "America/Denver", "America/Los_Angeles",
    "America/Sao_Paulo", "Europe/London", "Europe/Berlin", "Europe/Paris", "Africa/Nairobi",
    "Asia/Kolkata", "Asia/Tokyo", "Asia/Singapore", "Australia/Sydney", "Pacific/Auckland",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "Co"];

pub const BUZZ_VERBS: &[&str] = &[
    "implement", "utilize", "integrate", "streamline", "optimize", "evolve", "transform",
    "embrace", "enable", "orchestrate", "leverage", "reinvent", "aggregate", "architect",
];

pub const BUZZ_ADJECTIVES: &[&str] = &[
    "clicks-and-mortar", "value-added", "vertical", "proactive", "robust", "revolutionary",
    "scalable", "leading-edge", "innovative", "intuitive", "strategic", "e-business", "dynamic",
];

pub const BUZZ_NOUNS: &[&str] = &[
    "synergies", "paradigms", "markets", "partnerships", "infrastructures", "platforms",
    "initiatives", "channels", "communities", "solutions", "networks", "experiences",
];

pub const CATCH_ADJECTIVES: &[&str] = &[
    "Adaptive", "Advanced", "Automated", "Balanced", "Centralized", "Customizable",
    "Distributed", "Ergonomic", "Expanded", "Fundamental", "Integrated", "Managed", "Optional",
    "Persistent", "Reactive", "Synchronised", "User-friendly", "Versatile",
];

pub const CATCH_DESCRIPTORS: &[&str] = &[
    "24/7", "asymmetric", "bi-directional", "context-sensitive", "dedicated", "empowering",
    "heuristic", "interactive", "logistical", "mobile", "multi-tasking", "real-time",
    "static", "systemic", "zero-defect",
];

pub const CATCH_NOUNS: &[&str] = &[
    "ability", "algorithm", "approach", "architecture", "capability", "circuit", "database",
    "framework", "hierarchy", "interface", "middleware", "model", "moratorium", "portal",
    "productivity", "throughput", "workforce",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome", "Elegant", "Ergonomic", "Fantastic", "Generic", "Gorgeous", "Handcrafted",
    "Incredible", "Intelligent", "Licensed", "Practical", "Refined", "Rustic", "Sleek", "Small",
    "Tasty", "Unbranded",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Ceramic", "Concrete", "Cotton", "Frozen", "Fresh", "Granite", "Metal",
    "Plastic", "Rubber", "Soft", "Steel", "Wooden",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chips", "Computer", "Fish", "Gloves",
    "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes", "Soap",
    "Table", "Towels",
];

pub const DEPARTMENTS: &[&str] = &[
    "Automotive", "Baby", "Beauty", "Books", "Clothing", "Computers", "Electronics", "Games",
    "Garden", "Grocery", "Health", "Home", "Industrial", "Jewelry", "Kids", "Movies", "Music",
    "Outdoors", "Shoes", "Sports", "Tools", "Toys",
];

pub const COLORS: &[&str] = &[
    "azure", "black", "blue", "cyan", "fuchsia", "gold", "green", "grey", "indigo", "lavender",
    "lime", "magenta", "maroon", "mint green", "olive", "orange", "orchid", "pink", "plum",
    "purple", "red", "salmon", "silver", "sky blue", "tan", "teal", "turquoise", "violet",
    "white", "yellow",
];

pub const TRANSACTION_TYPES: &[&str] = &["deposit", "withdrawal", "payment", "invoice"];

pub const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "NZD", "SEK", "NOK", "DKK", "INR", "BRL",
    "MXN", "ZAR", "SGD",
];

pub const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "info", "biz", "io", "name"];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
];

pub const ANIMAL_TYPES: &[&str] = &[
    "bear", "bird", "cat", "cetacean", "cow", "crocodilia", "dog", "fish", "horse", "insect",
    "lion", "rabbit", "rodent", "snake",
];

pub const VEHICLES: &[&str] = &[
    "Toyota Corolla", "Honda Civic", "Ford F-150", "Tesla Model 3", "Volkswagen Golf",
    "BMW 3 Series", "Mazda CX-5", "Subaru Outback", "Chevrolet Camaro", "Kia Sportage",
    "Hyundai Elantra", "Volvo XC90", "Nissan Leaf", "Jeep Wrangler",
];

pub const LOREM_WORDS: &[&str] = &[
    "ad", "adipisci", "aliquam", "amet", "animi", "aperiam", "beatae", "blanditiis", "commodi",
    "consequatur", "corporis", "culpa", "debitis", "delectus", "dolor", "dolorem", "ea", "eius",
    "eos", "error", "est", "et", "eum", "facilis", "fugiat", "harum", "id", "illum", "ipsa",
    "ipsum", "iure", "laborum", "magnam", "maxime", "minima", "molestiae", "nemo", "nihil",
    "nobis", "odio", "omnis", "optio", "pariatur", "quae", "quia", "quis", "ratione",
    "recusandae", "sed", "sit", "sunt", "tempora", "ullam", "ut", "velit", "veniam", "vero",
    "voluptas", "voluptatem",
];

pub const BITCOIN_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
