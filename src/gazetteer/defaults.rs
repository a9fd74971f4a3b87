

pub const FALLBACK_STATES: &[&str] = &[
    "andaman and nicobar islands",
    "andhra pradesh",
    "haryana",
    "madhya pradesh",
];

pub const FALLBACK_DIVISIONS: &[&str] = &[
    "adoni", "agar", "alirajpur", "amalapuram", "ambala", "anakapalli",
    "ananthapuramu", "anuppur", "ashok nagar", "balaghat", "baptla",
    "barwani", "betul", "bhimavaram", "bhind", "bhopal", "campbell bay",
    "car nicobar", "chhatarpur", "chhindwara", "chittoor", "damoh",
    "datia", "dewas", "dhar", "diglipur", "dindori", "eluru", "gudur",
    "guna", "guntur", "gwalior", "harda", "hoshangabad", "indore",
    "jabalpur", "jhabua", "kadapa", "kakinada", "kamorta", "katni",
    "khandwa", "khargone", "khurai", "kurnool", "machilipatnam",
    "madanapalli", "mandla", "mandsour", "mauganj", "mayabun",
    "morena", "nandyal", "narasaraopet", "narsinghpur", "neemuch",
    "nellore", "niwari", "ongole", "paderu", "palasa", "panna",
    "parasia", "paravathipuram manyam", "podili", "port blair",
    "pulivendula", "puttaparthy", "raisen", "rajahmundry",
    "rajamehendravaram", "rajgarh", "rangat", "ratlam", "rayachoti",
    "rewa", "sagar", "sardarpur", "satna", "sehore", "seoni",
    "shahdol", "shajapur", "sheopur", "shivpuri", "sidhi",
    "singrouli", "srikakulam", "tikamgarh", "tirupathi", "ujjain",
    "umaria", "vidisha", "vijayawada", "visakhapatanm",
    "vizianagaram", "wimberlygunj", "ysr kadapa",
];
