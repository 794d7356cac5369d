use async_trait::async_trait;
use dionysus_commands::character::ABILITY_FIELD_NAME;
use dionysus_commands::video::{CHANNEL_NOT_FOUND, NO_VIDEOS};
use dionysus_commands::{dispatch, palette, parse_command, Command, Reply, Services};
use dionysus_video::VideoSearch;
use dionysus_wiki::WikiClient;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct FakeVideos {
    channel: Option<&'static str>,
    videos: Vec<&'static str>,
    calls: AtomicUsize,
}

#[async_trait]
impl VideoSearch for FakeVideos {
    async fn channel_id(&self, _channel_name: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.channel.map(str::to_string)
    }

    async fn recent_video_ids(&self, channel_id: &str) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(Some(channel_id), self.channel);
        self.videos.iter().map(|v| v.to_string()).collect()
    }
}

const PAGE: &str = r#"<html><body>
<span class="mw-page-title-main">Satoru Gojo</span>
<div class="mw-parser-output">
<aside><div class="pi-data-value pi-font">Legendary</div></aside>
<p>The strongest jujutsu sorcerer.</p>
<h2>Ability Information</h2>
<p>Infinity: Blocks attacks.</p>
<h2>Usage Guide</h2>
</div>
</body></html>"#;

async fn services(videos: Arc<FakeVideos>) -> (MockServer, Services) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Satoru_Gojo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wiki/Broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let wiki = WikiClient::new(&server.uri()).unwrap();
    (server, Services::new(wiki, videos, "!"))
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(t) => t,
        Reply::Embed(e) => panic!("expected text, got embed {e:?}"),
    }
}

#[tokio::test]
async fn character_command_renders_wiki_page() {
    let (_server, services) = services(Arc::new(FakeVideos::default())).await;
    let mut rng = StdRng::seed_from_u64(1);

    let reply = dispatch(&services, parse_command("!acd GOJO", "!"), &mut rng).await;
    let Reply::Embed(embed) = reply else {
        panic!("expected embed");
    };
    assert_eq!(embed.title.as_deref(), Some("Satoru Gojo"));
    assert_eq!(embed.description.as_deref(), Some("The strongest jujutsu sorcerer."));
    assert_eq!(embed.color, palette::LEGENDARY);
    let ability = embed
        .fields
        .iter()
        .find(|f| f.name == ABILITY_FIELD_NAME)
        .unwrap();
    assert_eq!(ability.value, "```Infinity:``` *Blocks attacks.*");
}

#[tokio::test]
async fn character_fetch_failure_shows_placeholder() {
    let (_server, services) = services(Arc::new(FakeVideos::default())).await;
    let mut rng = StdRng::seed_from_u64(1);

    let reply = dispatch(&services, Command::CharacterInfo(Some("Broken".into())), &mut rng).await;
    let Reply::Embed(embed) = reply else {
        panic!("expected embed");
    };
    assert_eq!(embed.title.as_deref(), Some("Unknown Character"));
    assert_eq!(
        embed.description.as_deref(),
        Some("Error: Unable to fetch the information.")
    );
}

#[tokio::test]
async fn character_without_name_is_usage_hint() {
    let (_server, services) = services(Arc::new(FakeVideos::default())).await;
    let mut rng = StdRng::seed_from_u64(1);
    let reply = text(dispatch(&services, Command::CharacterInfo(None), &mut rng).await);
    assert!(reply.contains("Usage: `!acd {character_name}`"));
}

#[tokio::test]
async fn video_without_channel_makes_no_calls() {
    let fake = Arc::new(FakeVideos::default());
    let (_server, services) = services(fake.clone()).await;
    let mut rng = StdRng::seed_from_u64(1);

    let reply = text(dispatch(&services, Command::RandomVideo(None), &mut rng).await);
    assert_eq!(
        reply,
        "Please provide a YouTube channel name. Usage: `!rv {youtube_channel}`"
    );
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn video_messages_distinguish_channel_and_videos() {
    let mut rng = StdRng::seed_from_u64(1);

    let (_s, no_channel) = services(Arc::new(FakeVideos::default())).await;
    let reply = text(dispatch(&no_channel, Command::RandomVideo(Some("x".into())), &mut rng).await);
    assert_eq!(reply, CHANNEL_NOT_FOUND);

    let (_s, no_videos) = services(Arc::new(FakeVideos {
        channel: Some("UC1"),
        ..Default::default()
    }))
    .await;
    let reply = text(dispatch(&no_videos, Command::RandomVideo(Some("x".into())), &mut rng).await);
    assert_eq!(reply, NO_VIDEOS);
}

#[tokio::test]
async fn video_pick_is_one_of_the_uploads() {
    let fake = Arc::new(FakeVideos {
        channel: Some("UC1"),
        videos: vec!["aaa", "bbb", "ccc"],
        ..Default::default()
    });
    let (_server, services) = services(fake).await;
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let reply = text(
            dispatch(&services, parse_command("!rv Cool Channel", "!"), &mut rng).await,
        );
        let url = reply
            .strip_prefix("Here's a random video from Cool Channel: https://www.youtube.com/watch?v=")
            .unwrap();
        assert!(["aaa", "bbb", "ccc"].contains(&url));
    }
}

#[tokio::test]
async fn tarot_and_help_need_no_network() {
    let (_server, services) = services(Arc::new(FakeVideos::default())).await;
    let mut rng = StdRng::seed_from_u64(9);

    let Reply::Embed(card) = dispatch(&services, Command::Tarot, &mut rng).await else {
        panic!("expected embed");
    };
    assert!(card.title.unwrap().starts_with("Your Tarot Card: "));
    assert_eq!(card.color, palette::TAROT);

    let Reply::Embed(help) = dispatch(&services, Command::Help, &mut rng).await else {
        panic!("expected embed");
    };
    assert_eq!(help.fields.len(), 3);
}
