//! Card image catalog.
//!
//! A per-variant mapping from record identifier to image path, kept
//! separate from the content tables and applied once when card lists
//! render. A miss means the card simply shows no thumbnail.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Variant;

static EXPERIENCE_CARD_IMAGES: &[(&str, &str)] = &[
    ("1", "assets/images/sdaia-jrcai.png"),
    ("2", "https://cdn.prod.website-files.com/66c8945bfb638155af230df6/66d5e83a7965368cd3bef0d4_SAP.png"),
    ("3", "assets/images/arkan.png"),
    ("4", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTte2-ZT_JSzcLjafdArm65XeFSrpA4sFkTdw&s"),
    ("5", "https://www.rmg-sa.com/wp-content/uploads/2023/10/512.jpg"),
    ("6", "assets/images/codelink.png"),
    ("7", "assets/images/kfupm-ses.png"),
    ("8", "assets/images/aifa-club.png"),
    ("9", "assets/images/net-zero.png"),
    ("edu1", "https://argaamplus.s3.amazonaws.com/be72021d-9734-4f0f-bb5d-dd27b437b815.png"),
    ("edu2", "https://i0.wp.com/postgrad.com.sg/wp-content/uploads/2019/10/NTU-School-Cover-Image-01.png?resize=760%2C497&ssl=1"),
    ("edu3", "https://media.licdn.com/dms/image/v2/C5610AQFzWKdrzdRvPw/videocover-high/videocover-high/0/1702853309863/Kaust_Squaremp4?e=2147483647&v=beta&t=W7wZnYa2j-jU4-cgIMv47qmaLWfPtBc-_ppCWejUqjo"),
];

// Base project rows render without thumbnails
static PROJECT_CARD_IMAGES: &[(&str, &str)] = &[];

static CERTIFICATION_CARD_IMAGES: &[(&str, &str)] = &[
    ("1", "https://media.licdn.com/dms/image/v2/D4E2DAQF57QCnL6IqZg/profile-treasury-document-images_1280/B4EZw3xPwlIkAU-/1/1770462185971?e=1772064000&v=beta&t=QlZIDxbqF4A7lyS7WuPdAsFx6mISBc00bsg1MLUjsmY"),
    ("2", "https://media.licdn.com/dms/image/v2/D4D2DAQH99wuPJnGt7w/profile-treasury-document-images_1280/B4DZX5vJ1OG8AY-/1/1743651645702?e=1772064000&v=beta&t=9XGS3-URBzvV-yOVOil7dpK1AxZI4Rhcqq5dwR9BYLE"),
    ("3", "https://media.licdn.com/dms/image/v2/D4D2DAQGOPOWmgv2UGA/profile-treasury-document-images_1280/B4DZX5uyxpGwAY-/1/1743651551471?e=1772064000&v=beta&t=KvVei5Y2ceXAeoCDF-wIQsnlcskwRStxMvYM7DxrBYU"),
    ("4", "https://media.licdn.com/dms/image/v2/D4D2DAQFVRLgetZJy-g/profile-treasury-image-shrink_800_800/B4DZbPfpVbGwAY-/0/1747237903123?e=1771671600&v=beta&t=G3cx-wdeyzhh06BkhO8vcei9Sa6x0OrV5Y_9EsBVrRo"),
    ("5", "https://media.licdn.com/dms/image/v2/D4D2DAQFFEsiGl6PbgA/profile-treasury-image-shrink_1280_1280/B4DZaxD5GRG8AQ-/0/1746727311944?e=1771671600&v=beta&t=tjWH8fbOP3sE0Ola3dgGgLI3pcLBwokKDXGkUxuyvl0"),
    ("6", "assets/images/mckinsey-forward.png"),
    ("7", "assets/images/a-phys101.jpg"),
    ("8", "assets/images/a-phys102.jpg"),
    ("9", "assets/images/gemfair.png"),
    ("10", "https://media.licdn.com/dms/image/v2/D4D2DAQH_iCuDAyiFyQ/profile-treasury-image-shrink_800_800/B4DZapAyQ.G4AY-/0/1746592278979?e=1771671600&v=beta&t=rHubdSi8VhHGcQF6N9xzce-RRXmTESvU-KHohpO0kUk"),
    ("11", "https://media.licdn.com/dms/image/v2/D4E2DAQFzsI1Pl5-6TQ/profile-treasury-image-shrink_1280_1280/B4EZw_As1sKAAQ-/0/1770583675605?e=1771671600&v=beta&t=a8e6jiM-qJ81Mxdos0CoQOgEFnZyah5lBdr3FZIBbHM"),
];

type ImageMap = HashMap<&'static str, &'static str>;

fn catalog() -> &'static HashMap<Variant, ImageMap> {
    static CATALOG: OnceLock<HashMap<Variant, ImageMap>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert(
            Variant::Experience,
            EXPERIENCE_CARD_IMAGES.iter().copied().collect(),
        );
        map.insert(Variant::Project, PROJECT_CARD_IMAGES.iter().copied().collect());
        map.insert(
            Variant::Certification,
            CERTIFICATION_CARD_IMAGES.iter().copied().collect(),
        );
        map
    })
}

/// Resolve the static card image for a record, if one is catalogued.
pub fn card_image(variant: Variant, id: &str) -> Option<&'static str> {
    catalog()
        .get(&variant)
        .and_then(|images| images.get(id).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_images_cover_education_ids() {
        assert!(card_image(Variant::Experience, "edu1").is_some());
        assert!(card_image(Variant::Experience, "edu3").is_some());
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        assert!(card_image(Variant::Experience, "42").is_none());
        assert!(card_image(Variant::Project, "1").is_none());
        assert!(card_image(Variant::Certification, "edu1").is_none());
    }

    #[test]
    fn test_certification_catalog_complete() {
        for id in 1..=11 {
            assert!(
                card_image(Variant::Certification, &id.to_string()).is_some(),
                "certification {id} has no card image"
            );
        }
    }
}
