//! Resource catalog and modal viewers.
//!
//! The catalog is a static, immutable list partitioned into articles,
//! videos, and websites. Clicking a card opens exactly one modal at a
//! time; closing clears the selection. Article text is trilingual
//! (English, Shona, Ndebele) and the reader can switch locale while
//! the modal is open.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::embed;
use crate::models::enums::{Locale, Platform};
use crate::models::{ArticleContent, ArticleResource, VideoResource, WebsiteResource};

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("No {kind} at index {index}")]
    UnknownResource { kind: &'static str, index: usize },

    #[error("No article is open")]
    NoArticleOpen,
}

// ═══════════════════════════════════════════
// Static catalog
// ═══════════════════════════════════════════

pub fn articles() -> Vec<ArticleResource> {
    vec![
        ArticleResource {
            title: "Understanding Pregnancy".into(),
            description: "What to expect in each trimester, week by week.".into(),
            category: "education".into(),
            content: ArticleContent {
                en: "Pregnancy is usually counted as 40 weeks, split into three trimesters. \
                     The first trimester runs to week 13, when the baby's organs form and \
                     tiredness and nausea are most common.\n\n\
                     The second trimester, weeks 14 to 27, is when many mothers feel their \
                     energy return and begin to feel the baby move.\n\n\
                     The third trimester is the final stretch: the baby gains weight, turns \
                     head-down, and your body prepares for labour. Regular antenatal visits \
                     matter most in these weeks."
                    .into(),
                sh: "Kuzvitakura kunoverengwa semavhiki makumi mana, akakamurwa muzvikamu \
                     zvitatu. Chikamu chekutanga chinosvika vhiki regumi nematatu.\n\n\
                     Muchikamu chechipiri vanaamai vazhinji vanonzwa simba richidzoka uye \
                     vanotanga kunzwa mwana achifamba.\n\n\
                     Chikamu chechitatu ndechekupedzisira: mwana anowedzera uremu uye muviri \
                     wako unogadzirira kusununguka."
                    .into(),
                nd: "Ukuzithwala kubalwa njengamaviki angamatshumi amane, ehlukaniswe \
                     izigaba ezintathu. Isigaba sokuqala sifika evikini letshumi lantathu.\n\n\
                     Esigabeni sesibili omama abanengi bezwa amandla ebuya njalo bezwa \
                     umntwana enyikinyeka.\n\n\
                     Isigaba sesithathu ngesokucina: umntwana uyakhula njalo umzimba wakho \
                     ulungiselela ukubeletha."
                    .into(),
            },
        },
        ArticleResource {
            title: "Healthy Eating During Pregnancy".into(),
            description: "Building balanced meals for you and your baby.".into(),
            category: "nutrition".into(),
            content: ArticleContent {
                en: "A balanced plate during pregnancy has plenty of vegetables, whole \
                     grains like sadza from unrefined meal, beans, eggs, and fruit in \
                     season. Iron and folate are the nutrients most often short.\n\n\
                     Drink water through the day, aim for eight to ten glasses, and limit \
                     very sugary drinks.\n\n\
                     Alcohol has no known safe amount during pregnancy; the safest choice \
                     is none at all."
                    .into(),
                sh: "Ndiro yakaenzana panguva yekuzvitakura ine muriwo wakawanda, sadza \
                     rezviyo zvisina kucheneswa, bhinzi, mazai, nemichero iripo.\n\n\
                     Inwa mvura zuva rese, edza kusvika magirazi masere kusvika gumi.\n\n\
                     Doro harina huwandu hunozivikanwa hwakachengeteka panguva \
                     yekuzvitakura; sarudzo yakachengeteka ndeyekusanwa zvachose."
                    .into(),
                nd: "Ipuleti elilingeneyo ngesikhathi sokuzithwala lilemibhida eminengi, \
                     isitshwala samabele angacengwanga, indumba, amaqanda lezithelo.\n\n\
                     Natha amanzi ilanga lonke, uzame inkomitsho eziyisificaminwembili \
                     kusiya kwezilitshumi.\n\n\
                     Utshwala kalula bungako obaziwayo obuvikelekileyo ngesikhathi \
                     sokuzithwala; okuvikeleke kakhulu yikungabunathi lutho."
                    .into(),
            },
        },
        ArticleResource {
            title: "Mindfulness for Expectant Moms".into(),
            description: "Simple breathing and rest practices for a calmer pregnancy.".into(),
            category: "wellness".into(),
            content: ArticleContent {
                en: "A few minutes of slow breathing each day lowers stress for you and \
                     your baby. Sit comfortably, breathe in for four counts, out for six, \
                     and let your shoulders drop.\n\n\
                     Short walks, gentle stretching, and regular sleep times all help mood \
                     in every trimester.\n\n\
                     If worry or low mood lasts more than two weeks, tell your nurse or \
                     doctor — it is common and treatable."
                    .into(),
                sh: "Maminitsi mashoma ekufema zvishoma nezvishoma zuva rimwe nerimwe \
                     anoderedza kushushikana kwako nemwana wako.\n\n\
                     Kufamba-famba, kutambanudza muviri zvinyoronyoro, nekurara nguva \
                     dzakatarwa zvinobatsira mufaro muzvikamu zvese.\n\n\
                     Kana kushushikana kuchipfuura mavhiki maviri, udza mukoti kana \
                     chiremba wako."
                    .into(),
                nd: "Imizuzu embalwa yokuphefumula kancane nsuku zonke yehlisa \
                     ukukhathazeka kwakho lomntwana wakho.\n\n\
                     Ukuhamba okufitshane, ukwelula umzimba kancane, lokulala ngezikhathi \
                     ezimisiweyo kuyasiza.\n\n\
                     Nxa ukukhathazeka kusedlula amaviki amabili, tshela umongikazi kumbe \
                     udokotela wakho."
                    .into(),
            },
        },
        ArticleResource {
            title: "Debunking 5 Common Pregnancy Myths in Zimbabwe".into(),
            description: "Separating tradition from medical evidence.".into(),
            category: "education".into(),
            content: ArticleContent {
                en: "Myth one: eating eggs makes the baby bald. There is no evidence for \
                     this — eggs are one of the best protein sources available.\n\n\
                     Myth two: traditional brews strengthen the baby. Any alcohol reaches \
                     the baby directly and can harm development at any stage.\n\n\
                     Myth three: a small bump means a weak baby. Bump size varies with \
                     body shape and muscle; only your antenatal measurements tell the \
                     real story. When in doubt, ask at your clinic — no question is too \
                     small."
                    .into(),
                sh: "Nhema yekutanga: kudya mazai kunoita kuti mwana ave nemhanza. Hapana \
                     humbowo hwazvo — mazai ndeimwe yenzvimbo dzakanakisa dzeprotein.\n\n\
                     Nhema yechipiri: doro rechivanhu rinosimbisa mwana. Doro ripi neripi \
                     rinosvika kumwana uye rinogona kukuvadza kukura kwake.\n\n\
                     Nhema yechitatu: dumbu diki rinoreva mwana asina simba. Ukuru \
                     hwedumbu hunosiyana nemuviri; zviyero zvekiriniki ndizvo zvinotaura \
                     chokwadi."
                    .into(),
                nd: "Inganekwane yokuqala: ukudla amaqanda kwenza umntwana abe lempabanga. \
                     Kalabufakazi — amaqanda angenye yezindawo ezinhle zeprotein.\n\n\
                     Inganekwane yesibili: utshwala besintu buqinisa umntwana. Loba yibuphi \
                     utshwala bufika emntwaneni njalo bungalimaza ukukhula kwakhe.\n\n\
                     Inganekwane yesithathu: isisu esincane sitsho umntwana obuthakathaka. \
                     Ubukhulu besisu buyehluka ngomzimba; izilinganiso zekliniki yizo \
                     ezitsho iqiniso."
                    .into(),
            },
        },
    ]
}

pub fn videos() -> Vec<VideoResource> {
    vec![
        VideoResource {
            title: "Pregnancy Week by Week".into(),
            description: "How your baby develops across all three trimesters.".into(),
            url: "https://www.youtube.com/watch?v=wk2ea9F2iZA".into(),
            platform: Platform::Youtube,
            category: "education".into(),
        },
        VideoResource {
            title: "Nutrition Basics for Expecting Mothers".into(),
            description: "Simple meal planning with locally available foods.".into(),
            url: "https://www.youtube.com/watch?v=5PNFKQvR550".into(),
            platform: Platform::Youtube,
            category: "nutrition".into(),
        },
        VideoResource {
            title: "Safe Exercise in Pregnancy".into(),
            description: "Gentle movement routines for each trimester.".into(),
            url: "https://www.youtube.com/watch?v=lKx0sOz31C4".into(),
            platform: Platform::Youtube,
            category: "wellness".into(),
        },
        VideoResource {
            title: "Preparing for Labour".into(),
            description: "What to pack, what to expect, and when to go in.".into(),
            url: "https://www.youtube.com/watch?v=0WCwC-3nTdg".into(),
            platform: Platform::Youtube,
            category: "education".into(),
        },
        VideoResource {
            title: "Breathing Through Contractions".into(),
            description: "Midwife-led breathing techniques for labour.".into(),
            url: "https://www.youtube.com/watch?v=uHH3vyWFapM".into(),
            platform: Platform::Youtube,
            category: "wellness".into(),
        },
        VideoResource {
            title: "Newborn Care Essentials".into(),
            description: "The first days at home with your baby.".into(),
            url: "https://www.youtube.com/watch?v=HkpRc8HXVNU&t=5s".into(),
            platform: Platform::Youtube,
            category: "education".into(),
        },
    ]
}

pub fn websites() -> Vec<WebsiteResource> {
    vec![
        WebsiteResource {
            name: "American Pregnancy Association".into(),
            url: "https://americanpregnancy.org".into(),
            description: "Evidence-based pregnancy information and resources".into(),
        },
        WebsiteResource {
            name: "Healthline - Pregnancy".into(),
            url: "https://www.healthline.com/health/pregnancy".into(),
            description: "Medical articles reviewed by healthcare professionals".into(),
        },
        WebsiteResource {
            name: "ACOG - Women's Health".into(),
            url: "https://www.acog.org/womens-health".into(),
            description: "Professional medical organization providing evidence-based guidelines"
                .into(),
        },
        WebsiteResource {
            name: "CDC - Pregnancy".into(),
            url: "https://www.cdc.gov/pregnancy/index.html".into(),
            description: "Centers for Disease Control pregnancy health information".into(),
        },
        WebsiteResource {
            name: "WebMD - Pregnancy".into(),
            url: "https://www.webmd.com/baby/default.htm".into(),
            description: "Pregnancy guides, tools, and week-by-week updates".into(),
        },
    ]
}

/// The full catalog, as rendered on the resources page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub articles: Vec<ArticleResource>,
    pub videos: Vec<VideoResource>,
    pub websites: Vec<WebsiteResource>,
}

pub fn catalog() -> ResourceCatalog {
    ResourceCatalog {
        articles: articles(),
        videos: videos(),
        websites: websites(),
    }
}

// ═══════════════════════════════════════════
// Modal viewer
// ═══════════════════════════════════════════

/// Which modal is open. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenResource {
    Article { index: usize, locale: Locale },
    Video { index: usize },
    Website { index: usize },
}

/// What the open modal renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceView {
    Article {
        title: String,
        locale: Locale,
        paragraphs: Vec<String>,
    },
    Video {
        title: String,
        embed_url: String,
    },
    Website {
        name: String,
        url: String,
    },
}

#[derive(Default)]
pub struct ResourceViewer {
    open: Option<OpenResource>,
}

impl ResourceViewer {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn open_article(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= articles().len() {
            return Err(ViewerError::UnknownResource { kind: "article", index });
        }
        // Default locale is English; switching happens in the open modal.
        self.open = Some(OpenResource::Article { index, locale: Locale::En });
        Ok(())
    }

    pub fn open_video(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= videos().len() {
            return Err(ViewerError::UnknownResource { kind: "video", index });
        }
        self.open = Some(OpenResource::Video { index });
        Ok(())
    }

    pub fn open_website(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= websites().len() {
            return Err(ViewerError::UnknownResource { kind: "website", index });
        }
        self.open = Some(OpenResource::Website { index });
        Ok(())
    }

    /// Close whatever is open; clears the selection.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Switch the reading locale of the open article. Text re-renders
    /// immediately via the next `view()`.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), ViewerError> {
        match self.open {
            Some(OpenResource::Article { index, .. }) => {
                self.open = Some(OpenResource::Article { index, locale });
                Ok(())
            }
            _ => Err(ViewerError::NoArticleOpen),
        }
    }

    pub fn open_resource(&self) -> Option<&OpenResource> {
        self.open.as_ref()
    }

    /// Render the open modal's content, if any.
    pub fn view(&self) -> Option<ResourceView> {
        match self.open {
            Some(OpenResource::Article { index, locale }) => {
                let article = articles().into_iter().nth(index)?;
                Some(ResourceView::Article {
                    title: article.title,
                    locale,
                    paragraphs: split_paragraphs(article.content.for_locale(locale)),
                })
            }
            Some(OpenResource::Video { index }) => {
                let video = videos().into_iter().nth(index)?;
                Some(ResourceView::Video {
                    embed_url: embed::embed_url(&video.url, video.platform),
                    title: video.title,
                })
            }
            Some(OpenResource::Website { index }) => {
                let site = websites().into_iter().nth(index)?;
                Some(ResourceView::Website {
                    name: site.name,
                    url: site.url,
                })
            }
            None => None,
        }
    }
}

/// Split article text into display paragraphs on blank lines.
fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_partitioned() {
        let catalog = catalog();
        assert_eq!(catalog.articles.len(), 4);
        assert_eq!(catalog.videos.len(), 6);
        assert_eq!(catalog.websites.len(), 5);
    }

    #[test]
    fn every_article_has_all_three_locales() {
        for article in articles() {
            assert!(!article.content.en.is_empty(), "{}", article.title);
            assert!(!article.content.sh.is_empty(), "{}", article.title);
            assert!(!article.content.nd.is_empty(), "{}", article.title);
        }
    }

    #[test]
    fn one_modal_at_a_time() {
        let mut viewer = ResourceViewer::new();
        viewer.open_article(0).unwrap();
        viewer.open_video(1).unwrap();

        // Opening the video replaced the article.
        assert!(matches!(
            viewer.open_resource(),
            Some(OpenResource::Video { index: 1 })
        ));
    }

    #[test]
    fn close_clears_selection() {
        let mut viewer = ResourceViewer::new();
        viewer.open_website(0).unwrap();
        viewer.close();
        assert!(viewer.open_resource().is_none());
        assert!(viewer.view().is_none());
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut viewer = ResourceViewer::new();
        assert!(viewer.open_article(99).is_err());
        assert!(viewer.open_video(99).is_err());
        assert!(viewer.open_website(99).is_err());
        assert!(viewer.open_resource().is_none());
    }

    #[test]
    fn article_opens_in_english_and_switches_locale() {
        let mut viewer = ResourceViewer::new();
        viewer.open_article(0).unwrap();

        let Some(ResourceView::Article { locale, paragraphs, .. }) = viewer.view() else {
            panic!("expected article view");
        };
        assert_eq!(locale, Locale::En);
        let english_first = paragraphs[0].clone();

        viewer.set_locale(Locale::Sh).unwrap();
        let Some(ResourceView::Article { locale, paragraphs, .. }) = viewer.view() else {
            panic!("expected article view");
        };
        assert_eq!(locale, Locale::Sh);
        assert_ne!(paragraphs[0], english_first);
    }

    #[test]
    fn locale_switch_requires_open_article() {
        let mut viewer = ResourceViewer::new();
        assert!(matches!(
            viewer.set_locale(Locale::Nd),
            Err(ViewerError::NoArticleOpen)
        ));

        viewer.open_video(0).unwrap();
        assert!(viewer.set_locale(Locale::Nd).is_err());
    }

    #[test]
    fn article_paragraphs_split_on_blank_lines() {
        let mut viewer = ResourceViewer::new();
        viewer.open_article(0).unwrap();
        let Some(ResourceView::Article { paragraphs, .. }) = viewer.view() else {
            panic!("expected article view");
        };
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs.iter().all(|p| !p.trim().is_empty()));
    }

    #[test]
    fn video_view_embeds_platform_url() {
        let mut viewer = ResourceViewer::new();
        viewer.open_video(0).unwrap();
        let Some(ResourceView::Video { embed_url, .. }) = viewer.view() else {
            panic!("expected video view");
        };
        assert!(embed_url.starts_with("https://www.youtube.com/embed/"));
    }
}
