#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the player operations.

pub mod common;

use serde_json::{Value, json};

/// A per-queue ranked block as `getplayer` embeds it.
fn ranked(name: &str, tier: i32, wins: i32) -> Value {
    json!({
        "Leaves": 0,
        "Losses": 20,
        "Name": name,
        "Points": 75,
        "PrevRank": tier,
        "Rank": 0,
        "Season": 5,
        "Tier": tier,
        "Trend": 1,
        "Wins": wins
    })
}

/// A minimal full profile as `getplayer` returns it.
fn profile(name: &str, id: i64) -> Value {
    json!({
        "ActivePlayerId": id,
        "Avatar_URL": "",
        "Created_Datetime": "3/1/2015 8:21:35 AM",
        "HoursPlayed": 100,
        "Id": id,
        "Last_Login_Datetime": "",
        "Leaves": 0,
        "Level": 30,
        "Losses": 40,
        "MasteryLevel": 10,
        "MergedPlayers": null,
        "Name": name,
        "Personal_Status_Message": "",
        "Rank_Stat_Conquest": 0.0,
        "Rank_Stat_Conquest_Controller": 0.0,
        "Rank_Stat_Duel": 0.0,
        "Rank_Stat_Duel_Controller": 0.0,
        "Rank_Stat_Joust": 0.0,
        "Rank_Stat_Joust_Controller": 0.0,
        "RankedConquest": ranked("Conquest", 0, 0),
        "RankedConquestController": ranked("Conquest", 0, 0),
        "RankedDuel": ranked("Duel", 0, 0),
        "RankedDuelController": ranked("Duel", 0, 0),
        "RankedJoust": ranked("Joust", 0, 0),
        "RankedJoustController": ranked("Joust", 0, 0),
        "Region": "Europe",
        "TeamId": 0,
        "Team_Name": "",
        "Tier_Conquest": 0,
        "Tier_Duel": 0,
        "Tier_Joust": 0,
        "Total_Achievements": 0,
        "Total_Worshippers": 100,
        "Wins": 60,
        "hz_gamer_tag": null,
        "hz_player_name": name,
        "ret_msg": null
    })
}

mod searches {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use smite_client_sdk::error::Kind;
    use smite_client_sdk::types::Portal;

    use crate::common;

    #[tokio::test]
    async fn player_ids_by_name_should_return_all_hits() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path_includes("/getplayeridbynamejson/")
                .path_suffix("/Weak3n");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "player_id": 706_057,
                    "portal": "Hi-Rez",
                    "portal_id": "1",
                    "privacy_flag": "n",
                    "ret_msg": null
                },
                {
                    "player_id": 9_991_234,
                    "portal": "Steam",
                    "portal_id": 5,
                    "privacy_flag": "y",
                    "ret_msg": null
                }
            ]));
        });

        let hits = client.player_ids_by_name("Weak3n").await?;

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].player_id(), 706_057);
        assert_eq!(hits[0].portal(), Portal::HiRez);
        assert!(!hits[0].is_private());
        assert_eq!(hits[1].portal(), Portal::Steam);
        assert!(hits[1].is_private());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn player_ids_by_name_should_handle_no_hits() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayeridbynamejson/");
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let hits = client.player_ids_by_name("NoSuchPlayer").await?;

        assert!(hits.is_empty());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_should_fail_before_any_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let session_mock = common::mock_session(&server);

        let error = client.player_ids_by_name("   ").await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(session_mock.hits(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn gamertag_search_should_send_portal_before_tag() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path_includes("/getplayeridsbygamertagjson/")
                .path_suffix("/10/RuthlessGamer");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "player_id": 13_371_337,
                    "portal": "XBox",
                    "portal_id": "10",
                    "privacy_flag": "n",
                    "ret_msg": null
                }
            ]));
        });

        let hits = client
            .player_ids_by_gamertag("RuthlessGamer", Portal::Xbox)
            .await?;

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].portal(), Portal::Xbox);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn unknown_portal_should_fail_validation() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let session_mock = common::mock_session(&server);

        let error = client
            .player_ids_by_gamertag("RuthlessGamer", Portal::Unknown)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(session_mock.hits(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn negative_portal_user_id_should_fail_validation() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let session_mock = common::mock_session(&server);

        let error = client
            .player_ids_by_portal_user_id(Portal::Steam, -1)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(session_mock.hits(), 0);
        Ok(())
    }
}

mod profiles {
    use chrono::{TimeZone as _, Utc};
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use smite_client_sdk::types::{Portal, Rank};

    use crate::common;
    use crate::{profile, ranked};

    #[tokio::test]
    async fn players_by_name_should_handle_no_hits() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayerjson/");
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let players = client.players_by_name("NoSuchPlayer", Portal::HiRez).await?;

        assert!(players.is_empty());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn players_by_name_should_return_merged_accounts_in_order() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayerjson/");
            then.status(StatusCode::OK)
                .json_body(json!([profile("OldName", 1_111), profile("NewName", 2_222)]));
        });

        let players = client.players_by_name("OldName", Portal::HiRez).await?;

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name(), Some("OldName"));
        assert_eq!(players[0].player_id(), 1_111);
        assert_eq!(players[1].name(), Some("NewName"));
        assert_eq!(players[1].player_id(), 2_222);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn players_by_name_should_expose_full_profile() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path_includes("/getplayerjson/")
                .path_suffix("/Weak3n/1");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "ActivePlayerId": 706_057,
                    "Avatar_URL": "",
                    "Created_Datetime": "3/1/2015 8:21:35 AM",
                    "HoursPlayed": 4341,
                    "Id": 706_057,
                    "Last_Login_Datetime": "2019-07-24T22:10:04Z",
                    "Leaves": 12,
                    "Level": 160,
                    "Losses": 2795,
                    "MasteryLevel": 463,
                    "MergedPlayers": [
                        {
                            "merge_datetime": "3/1/2015 8:21:35 AM",
                            "playerId": "1234",
                            "portalId": "5"
                        },
                        {
                            "merge_datetime": "",
                            "playerId": 5678,
                            "portalId": 999
                        }
                    ],
                    "Name": "Weak3n",
                    "Personal_Status_Message": "grinding",
                    "Rank_Stat_Conquest": 2748.37,
                    "Rank_Stat_Conquest_Controller": 0.0,
                    "Rank_Stat_Duel": 1913.22,
                    "Rank_Stat_Duel_Controller": 0.0,
                    "Rank_Stat_Joust": 1510.05,
                    "Rank_Stat_Joust_Controller": 0.0,
                    "RankedConquest": ranked("Conquest", 26, 320),
                    "RankedConquestController": ranked("Conquest", 0, 0),
                    "RankedDuel": ranked("Duel", 14, 88),
                    "RankedDuelController": ranked("Duel", 0, 0),
                    "RankedJoust": ranked("Joust", 11, 40),
                    "RankedJoustController": ranked("Joust", 0, 0),
                    "Region": "North America",
                    "TeamId": 0,
                    "Team_Name": "",
                    "Tier_Conquest": 26,
                    "Tier_Duel": 99,
                    "Tier_Joust": 11,
                    "Total_Achievements": 45,
                    "Total_Worshippers": 126_753,
                    "Wins": 3193,
                    "hz_gamer_tag": null,
                    "hz_player_name": "Weak3n",
                    "ret_msg": null
                }
            ]));
        });

        let players = client.players_by_name("Weak3n", Portal::HiRez).await?;

        assert_eq!(players.len(), 1);
        let player = &players[0];

        assert_eq!(player.name(), Some("Weak3n"));
        assert_eq!(player.level(), 160);
        assert_eq!(player.region(), Some("North America"));
        assert_eq!(player.to_string(), "Weak3n");

        // empty avatar string maps to no URL; repeated reads are idempotent
        assert_eq!(player.avatar_url(), None);
        assert_eq!(player.avatar_url(), None);

        assert_eq!(
            player.created_at(),
            Some(Utc.with_ymd_and_hms(2015, 3, 1, 8, 21, 35).unwrap())
        );
        assert_eq!(
            player.last_login(),
            Some(Utc.with_ymd_and_hms(2019, 7, 24, 22, 10, 4).unwrap())
        );

        assert_eq!(player.conquest_rank(), Rank::Masters);
        assert_eq!(player.duel_rank(), Rank::Unknown);
        assert_eq!(player.joust_rank(), Rank::Gold5);

        let conquest = player.ranked_conquest();
        assert_eq!(conquest.tier(), Rank::Masters);
        assert_eq!(conquest.wins(), 320);
        assert_eq!(conquest.season(), 5);

        let merged = player.merged_players();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].player_id(), Some("1234"));
        assert_eq!(merged[0].portal(), Portal::Steam);
        assert!(merged[0].merged_at().is_some());
        assert_eq!(merged[1].player_id(), Some("5678"));
        assert_eq!(merged[1].portal(), Portal::Unknown);
        assert_eq!(merged[1].merged_at(), None);

        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn players_by_name_should_handle_unmerged_profiles() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayerjson/");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "ActivePlayerId": 1,
                    "Avatar_URL": "https://web2.hirez.com/smite/avatars/1.png",
                    "Created_Datetime": "",
                    "HoursPlayed": 2,
                    "Id": 1,
                    "Last_Login_Datetime": "",
                    "Leaves": 0,
                    "Level": 3,
                    "Losses": 1,
                    "MasteryLevel": 0,
                    "MergedPlayers": null,
                    "Name": "FreshAccount",
                    "Personal_Status_Message": "",
                    "Rank_Stat_Conquest": 0.0,
                    "Rank_Stat_Conquest_Controller": 0.0,
                    "Rank_Stat_Duel": 0.0,
                    "Rank_Stat_Duel_Controller": 0.0,
                    "Rank_Stat_Joust": 0.0,
                    "Rank_Stat_Joust_Controller": 0.0,
                    "RankedConquest": ranked("Conquest", 0, 0),
                    "RankedConquestController": ranked("Conquest", 0, 0),
                    "RankedDuel": ranked("Duel", 0, 0),
                    "RankedDuelController": ranked("Duel", 0, 0),
                    "RankedJoust": ranked("Joust", 0, 0),
                    "RankedJoustController": ranked("Joust", 0, 0),
                    "Region": "Europe",
                    "TeamId": 0,
                    "Team_Name": "",
                    "Tier_Conquest": 0,
                    "Tier_Duel": 0,
                    "Tier_Joust": 0,
                    "Total_Achievements": 0,
                    "Total_Worshippers": 14,
                    "Wins": 1,
                    "hz_gamer_tag": null,
                    "hz_player_name": "FreshAccount",
                    "ret_msg": null
                }
            ]));
        });

        let players = client.players_by_name("FreshAccount", Portal::HiRez).await?;

        assert_eq!(players.len(), 1);
        assert!(players[0].merged_players().is_empty());
        assert_eq!(players[0].created_at(), None);
        assert_eq!(
            players[0].avatar_url().map(url::Url::as_str),
            Some("https://web2.hirez.com/smite/avatars/1.png")
        );
        assert_eq!(players[0].conquest_rank(), Rank::Unranked);
        mock.assert();
        Ok(())
    }
}

mod social {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use smite_client_sdk::error::Kind;
    use smite_client_sdk::types::{PlayerStatus, Portal};

    use crate::common;

    #[tokio::test]
    async fn friends_should_parse_string_encoded_ids() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path_includes("/getfriendsjson/")
                .path_suffix("/706057");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "account_id": "111",
                    "avatar_url": "https://web2.hirez.com/smite/avatars/111.png",
                    "friend_flags": "1",
                    "name": "Khepri4Life",
                    "player_id": "222",
                    "portal_id": "1",
                    "status": "Friend",
                    "ret_msg": null
                },
                {
                    "account_id": 333,
                    "avatar_url": "",
                    "friend_flags": "1",
                    "name": "SoloOrTroll",
                    "player_id": 444,
                    "portal_id": 5,
                    "status": "Friend",
                    "ret_msg": null
                }
            ]));
        });

        let friends = client.friends(706_057).await?;

        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].player_id(), Some(222));
        assert_eq!(friends[0].account_id(), Some(111));
        assert_eq!(friends[0].portal(), Portal::HiRez);
        assert!(friends[0].avatar_url().is_some());
        assert_eq!(friends[1].player_id(), Some(444));
        assert_eq!(friends[1].portal(), Portal::Steam);
        assert_eq!(friends[1].avatar_url(), None);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn negative_player_id_should_fail_validation() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let session_mock = common::mock_session(&server);

        let error = client.friends(-5).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(session_mock.hits(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn player_accolades_should_expose_lifetime_totals() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path_includes("/getplayerachievementsjson/")
                .path_suffix("/706057");
            then.status(StatusCode::OK).json_body(json!({
                "AssistedKills": 35_694,
                "CampsCleared": 5_459,
                "Deaths": 24_580,
                "DivineSpree": 206,
                "DoubleKills": 4_066,
                "FireGiantKills": 346,
                "FirstBloods": 1_130,
                "GodLikeSpree": 86,
                "GoldFuryKills": 1_421,
                "Id": 706_057,
                "ImmortalSpree": 137,
                "KillingSpree": 5_111,
                "MinionKills": 1_226_176,
                "Name": "Weak3n",
                "PentaKills": 33,
                "PhoenixKills": 1_753,
                "PlayerKills": 42_163,
                "QuadraKills": 268,
                "RampageSpree": 1_496,
                "ShutdownSpree": 751,
                "SiegeJuggernautKills": 21,
                "TowerKills": 6_245,
                "TripleKills": 967,
                "UnstoppableSpree": 526,
                "WildJuggernautKills": 34,
                "Worshippers": 126_753,
                "ret_msg": null
            }));
        });

        let accolades = client.player_accolades(706_057).await?;

        assert_eq!(accolades.player_id(), 706_057);
        assert_eq!(accolades.name(), Some("Weak3n"));
        assert_eq!(accolades.player_kills(), 42_163);
        assert_eq!(accolades.penta_kills(), 33);
        assert_eq!(accolades.fire_giant_kills(), 346);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn player_status_should_map_codes_and_match_ids() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayerstatusjson/");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "Match": 939_102_708,
                    "match_queue_id": 426,
                    "personal_status_message": "",
                    "status": 3,
                    "status_string": "In Game",
                    "ret_msg": null
                }
            ]));
        });

        let statuses = client.player_status(706_057).await?;

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].status(), PlayerStatus::InGame);
        assert_eq!(statuses[0].match_id(), Some(939_102_708));
        assert_eq!(statuses[0].match_queue_id(), Some(426));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn offline_status_should_have_no_match() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_client(&server)?;

        let _session_mock = common::mock_session(&server);
        let mock = server.mock(|when, then| {
            when.method(GET).path_includes("/getplayerstatusjson/");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "Match": 0,
                    "match_queue_id": 0,
                    "personal_status_message": "",
                    "status": 0,
                    "status_string": "Offline",
                    "ret_msg": null
                },
                {
                    "Match": 0,
                    "match_queue_id": 0,
                    "personal_status_message": "",
                    "status": 99,
                    "status_string": "???",
                    "ret_msg": null
                }
            ]));
        });

        let statuses = client.player_status(706_057).await?;

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].status(), PlayerStatus::Offline);
        assert_eq!(statuses[0].match_id(), None);
        assert_eq!(statuses[1].status(), PlayerStatus::Unknown);
        mock.assert();
        Ok(())
    }
}
