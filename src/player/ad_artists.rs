// YouTube Music reports this placeholder as the artist while an ad runs before
// the next video. Sourced from the app's `video_after_ad_multiline` string.
// Locales missing here are classified as regular content.
pub const VIDEO_AFTER_AD: &[&str] = &[
    "Video sal ná advertensie speel",              // af
    "ቪዲዮው ከማስታወቂያው በኋላ ይጫወታል",                  // am
    "Відэа будзе прайгравацца праз пасля рэкламы", // be
    "বিজ্ঞাপনের পরে ভিডিও প্লে হবে",                    // bn
    "Video will play after ad",                    // en
    "El vídeo se reproducirá después del anuncio", // es
    "Videozapis će se reproducirati nakon oglasa", // hr
    "Vídeó spilast eftir auglýsingu",              // is
    "Il video verrà riprodotto dopo l'annuncio",   // it
    "ვიდეო დაუკრავს რეკლამის შემდეგ",               // ka
    "ວິດີໂອຈະຫຼິ້ນຫຼັງຈາກໂຄສະນາ",                     // lo
    "Video begint na advertentie",                 // nl
    "Воспроизведение начнется после рекламы",      // ru
    "වීඩියෝව දැන්වීමෙන් පසුව වාදනය වේ",                // si
    "Ividiyo izodlala ngemva kwesikhangiso",       // zu
];
