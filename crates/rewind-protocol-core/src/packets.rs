//! Packet identities per protocol version. Ids follow declaration order.

/// A version-specific packet enumeration.
pub trait PacketType: Copy + Eq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn id(self) -> i32;
    fn name(self) -> &'static str;

    fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

macro_rules! packet_ids {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $wire:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),*
        }

        impl PacketType for $name {
            const ALL: &'static [Self] = &[$($name::$variant),*];

            fn id(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),*
                }
            }
        }
    };
}

packet_ids! {
    /// Play state, server to client, protocol 767.
    pub enum ClientboundPackets1_21 {
        BundleDelimiter => "bundle_delimiter",
        AddEntity => "add_entity",
        AddExperienceOrb => "add_experience_orb",
        Animate => "animate",
        AwardStats => "award_stats",
        BlockChangedAck => "block_changed_ack",
        BlockDestruction => "block_destruction",
        BlockEntityData => "block_entity_data",
        BlockEvent => "block_event",
        BlockUpdate => "block_update",
        BossEvent => "boss_event",
        ChangeDifficulty => "change_difficulty",
        ChunkBatchFinished => "chunk_batch_finished",
        ChunkBatchStart => "chunk_batch_start",
        ChunksBiomes => "chunks_biomes",
        ClearTitles => "clear_titles",
        CommandSuggestions => "command_suggestions",
        Commands => "commands",
        ContainerClose => "container_close",
        ContainerSetContent => "container_set_content",
        ContainerSetData => "container_set_data",
        ContainerSetSlot => "container_set_slot",
        CookieRequest => "cookie_request",
        Cooldown => "cooldown",
        CustomChatCompletions => "custom_chat_completions",
        CustomPayload => "custom_payload",
        DamageEvent => "damage_event",
        DebugSample => "debug_sample",
        DeleteChat => "delete_chat",
        Disconnect => "disconnect",
        DisguisedChat => "disguised_chat",
        EntityEvent => "entity_event",
        Explode => "explode",
        ForgetLevelChunk => "forget_level_chunk",
        GameEvent => "game_event",
        HorseScreenOpen => "horse_screen_open",
        HurtAnimation => "hurt_animation",
        InitializeBorder => "initialize_border",
        KeepAlive => "keep_alive",
        LevelChunkWithLight => "level_chunk_with_light",
        LevelEvent => "level_event",
        LevelParticles => "level_particles",
        LightUpdate => "light_update",
        Login => "login",
        MapItemData => "map_item_data",
        MerchantOffers => "merchant_offers",
        MoveEntityPos => "move_entity_pos",
        MoveEntityPosRot => "move_entity_pos_rot",
        MoveEntityRot => "move_entity_rot",
        MoveVehicle => "move_vehicle",
        OpenBook => "open_book",
        OpenScreen => "open_screen",
        OpenSignEditor => "open_sign_editor",
        Ping => "ping",
        PongResponse => "pong_response",
        PlaceGhostRecipe => "place_ghost_recipe",
        PlayerAbilities => "player_abilities",
        PlayerChat => "player_chat",
        PlayerCombatEnd => "player_combat_end",
        PlayerCombatEnter => "player_combat_enter",
        PlayerCombatKill => "player_combat_kill",
        PlayerInfoRemove => "player_info_remove",
        PlayerInfoUpdate => "player_info_update",
        PlayerLookAt => "player_look_at",
        PlayerPosition => "player_position",
        Recipe => "recipe",
        RemoveEntities => "remove_entities",
        RemoveMobEffect => "remove_mob_effect",
        ResetScore => "reset_score",
        ResourcePackPop => "resource_pack_pop",
        ResourcePackPush => "resource_pack_push",
        Respawn => "respawn",
        RotateHead => "rotate_head",
        SectionBlocksUpdate => "section_blocks_update",
        SelectAdvancementsTab => "select_advancements_tab",
        ServerData => "server_data",
        SetActionBarText => "set_action_bar_text",
        SetBorderCenter => "set_border_center",
        SetBorderLerpSize => "set_border_lerp_size",
        SetBorderSize => "set_border_size",
        SetBorderWarningDelay => "set_border_warning_delay",
        SetBorderWarningDistance => "set_border_warning_distance",
        SetCamera => "set_camera",
        SetCarriedItem => "set_carried_item",
        SetChunkCacheCenter => "set_chunk_cache_center",
        SetChunkCacheRadius => "set_chunk_cache_radius",
        SetDefaultSpawnPosition => "set_default_spawn_position",
        SetDisplayObjective => "set_display_objective",
        SetEntityData => "set_entity_data",
        SetEntityLink => "set_entity_link",
        SetEntityMotion => "set_entity_motion",
        SetEquipment => "set_equipment",
        SetExperience => "set_experience",
        SetHealth => "set_health",
        SetObjective => "set_objective",
        SetPassengers => "set_passengers",
        SetPlayerTeam => "set_player_team",
        SetScore => "set_score",
        SetSimulationDistance => "set_simulation_distance",
        SetSubtitleText => "set_subtitle_text",
        SetTime => "set_time",
        SetTitleText => "set_title_text",
        SetTitlesAnimation => "set_titles_animation",
        SoundEntity => "sound_entity",
        Sound => "sound",
        StartConfiguration => "start_configuration",
        StopSound => "stop_sound",
        StoreCookie => "store_cookie",
        SystemChat => "system_chat",
        TabList => "tab_list",
        TagQuery => "tag_query",
        TakeItemEntity => "take_item_entity",
        TeleportEntity => "teleport_entity",
        TickingState => "ticking_state",
        TickingStep => "ticking_step",
        Transfer => "transfer",
        UpdateAdvancements => "update_advancements",
        UpdateAttributes => "update_attributes",
        UpdateMobEffect => "update_mob_effect",
        UpdateRecipes => "update_recipes",
        UpdateTags => "update_tags",
        ProjectilePower => "projectile_power",
        CustomReportDetails => "custom_report_details",
        ServerLinks => "server_links",
    }
}

packet_ids! {
    /// Play state, server to client, protocol 768.
    pub enum ClientboundPackets1_21_2 {
        BundleDelimiter => "bundle_delimiter",
        AddEntity => "add_entity",
        AddExperienceOrb => "add_experience_orb",
        Animate => "animate",
        AwardStats => "award_stats",
        BlockChangedAck => "block_changed_ack",
        BlockDestruction => "block_destruction",
        BlockEntityData => "block_entity_data",
        BlockEvent => "block_event",
        BlockUpdate => "block_update",
        BossEvent => "boss_event",
        ChangeDifficulty => "change_difficulty",
        ChunkBatchFinished => "chunk_batch_finished",
        ChunkBatchStart => "chunk_batch_start",
        ChunksBiomes => "chunks_biomes",
        ClearTitles => "clear_titles",
        CommandSuggestions => "command_suggestions",
        Commands => "commands",
        ContainerClose => "container_close",
        ContainerSetContent => "container_set_content",
        ContainerSetData => "container_set_data",
        ContainerSetSlot => "container_set_slot",
        CookieRequest => "cookie_request",
        Cooldown => "cooldown",
        CustomChatCompletions => "custom_chat_completions",
        CustomPayload => "custom_payload",
        DamageEvent => "damage_event",
        DebugSample => "debug_sample",
        DeleteChat => "delete_chat",
        Disconnect => "disconnect",
        DisguisedChat => "disguised_chat",
        EntityEvent => "entity_event",
        EntityPositionSync => "entity_position_sync",
        Explode => "explode",
        ForgetLevelChunk => "forget_level_chunk",
        GameEvent => "game_event",
        HorseScreenOpen => "horse_screen_open",
        HurtAnimation => "hurt_animation",
        InitializeBorder => "initialize_border",
        KeepAlive => "keep_alive",
        LevelChunkWithLight => "level_chunk_with_light",
        LevelEvent => "level_event",
        LevelParticles => "level_particles",
        LightUpdate => "light_update",
        Login => "login",
        MapItemData => "map_item_data",
        MerchantOffers => "merchant_offers",
        MoveEntityPos => "move_entity_pos",
        MoveEntityPosRot => "move_entity_pos_rot",
        MoveMinecartAlongTrack => "move_minecart_along_track",
        MoveEntityRot => "move_entity_rot",
        MoveVehicle => "move_vehicle",
        OpenBook => "open_book",
        OpenScreen => "open_screen",
        OpenSignEditor => "open_sign_editor",
        Ping => "ping",
        PongResponse => "pong_response",
        PlaceGhostRecipe => "place_ghost_recipe",
        PlayerAbilities => "player_abilities",
        PlayerChat => "player_chat",
        PlayerCombatEnd => "player_combat_end",
        PlayerCombatEnter => "player_combat_enter",
        PlayerCombatKill => "player_combat_kill",
        PlayerInfoRemove => "player_info_remove",
        PlayerInfoUpdate => "player_info_update",
        PlayerLookAt => "player_look_at",
        PlayerPosition => "player_position",
        PlayerRotation => "player_rotation",
        RecipeBookAdd => "recipe_book_add",
        RecipeBookRemove => "recipe_book_remove",
        RecipeBookSettings => "recipe_book_settings",
        RemoveEntities => "remove_entities",
        RemoveMobEffect => "remove_mob_effect",
        ResetScore => "reset_score",
        ResourcePackPop => "resource_pack_pop",
        ResourcePackPush => "resource_pack_push",
        Respawn => "respawn",
        RotateHead => "rotate_head",
        SectionBlocksUpdate => "section_blocks_update",
        SelectAdvancementsTab => "select_advancements_tab",
        ServerData => "server_data",
        SetActionBarText => "set_action_bar_text",
        SetBorderCenter => "set_border_center",
        SetBorderLerpSize => "set_border_lerp_size",
        SetBorderSize => "set_border_size",
        SetBorderWarningDelay => "set_border_warning_delay",
        SetBorderWarningDistance => "set_border_warning_distance",
        SetCamera => "set_camera",
        SetChunkCacheCenter => "set_chunk_cache_center",
        SetChunkCacheRadius => "set_chunk_cache_radius",
        SetCursorItem => "set_cursor_item",
        SetDefaultSpawnPosition => "set_default_spawn_position",
        SetDisplayObjective => "set_display_objective",
        SetEntityData => "set_entity_data",
        SetEntityLink => "set_entity_link",
        SetEntityMotion => "set_entity_motion",
        SetEquipment => "set_equipment",
        SetExperience => "set_experience",
        SetHealth => "set_health",
        SetHeldSlot => "set_held_slot",
        SetObjective => "set_objective",
        SetPassengers => "set_passengers",
        SetPlayerInventory => "set_player_inventory",
        SetPlayerTeam => "set_player_team",
        SetScore => "set_score",
        SetSimulationDistance => "set_simulation_distance",
        SetSubtitleText => "set_subtitle_text",
        SetTime => "set_time",
        SetTitleText => "set_title_text",
        SetTitlesAnimation => "set_titles_animation",
        SoundEntity => "sound_entity",
        Sound => "sound",
        StartConfiguration => "start_configuration",
        StopSound => "stop_sound",
        StoreCookie => "store_cookie",
        SystemChat => "system_chat",
        TabList => "tab_list",
        TagQuery => "tag_query",
        TakeItemEntity => "take_item_entity",
        TeleportEntity => "teleport_entity",
        TickingState => "ticking_state",
        TickingStep => "ticking_step",
        Transfer => "transfer",
        UpdateAdvancements => "update_advancements",
        UpdateAttributes => "update_attributes",
        UpdateMobEffect => "update_mob_effect",
        UpdateRecipes => "update_recipes",
        UpdateTags => "update_tags",
        ProjectilePower => "projectile_power",
        CustomReportDetails => "custom_report_details",
        ServerLinks => "server_links",
    }
}

packet_ids! {
    /// Play state, server to client, protocol 766.
    pub enum ClientboundPackets1_20_5 {
        BundleDelimiter => "bundle_delimiter",
        AddEntity => "add_entity",
        AddExperienceOrb => "add_experience_orb",
        Animate => "animate",
        AwardStats => "award_stats",
        BlockChangedAck => "block_changed_ack",
        BlockDestruction => "block_destruction",
        BlockEntityData => "block_entity_data",
        BlockEvent => "block_event",
        BlockUpdate => "block_update",
        BossEvent => "boss_event",
        ChangeDifficulty => "change_difficulty",
        ChunkBatchFinished => "chunk_batch_finished",
        ChunkBatchStart => "chunk_batch_start",
        ChunksBiomes => "chunks_biomes",
        ClearTitles => "clear_titles",
        CommandSuggestions => "command_suggestions",
        Commands => "commands",
        ContainerClose => "container_close",
        ContainerSetContent => "container_set_content",
        ContainerSetData => "container_set_data",
        ContainerSetSlot => "container_set_slot",
        CookieRequest => "cookie_request",
        Cooldown => "cooldown",
        CustomChatCompletions => "custom_chat_completions",
        CustomPayload => "custom_payload",
        DamageEvent => "damage_event",
        DebugSample => "debug_sample",
        DeleteChat => "delete_chat",
        Disconnect => "disconnect",
        DisguisedChat => "disguised_chat",
        EntityEvent => "entity_event",
        Explode => "explode",
        ForgetLevelChunk => "forget_level_chunk",
        GameEvent => "game_event",
        HorseScreenOpen => "horse_screen_open",
        HurtAnimation => "hurt_animation",
        InitializeBorder => "initialize_border",
        KeepAlive => "keep_alive",
        LevelChunkWithLight => "level_chunk_with_light",
        LevelEvent => "level_event",
        LevelParticles => "level_particles",
        LightUpdate => "light_update",
        Login => "login",
        MapItemData => "map_item_data",
        MerchantOffers => "merchant_offers",
        MoveEntityPos => "move_entity_pos",
        MoveEntityPosRot => "move_entity_pos_rot",
        MoveEntityRot => "move_entity_rot",
        MoveVehicle => "move_vehicle",
        OpenBook => "open_book",
        OpenScreen => "open_screen",
        OpenSignEditor => "open_sign_editor",
        Ping => "ping",
        PongResponse => "pong_response",
        PlaceGhostRecipe => "place_ghost_recipe",
        PlayerAbilities => "player_abilities",
        PlayerChat => "player_chat",
        PlayerCombatEnd => "player_combat_end",
        PlayerCombatEnter => "player_combat_enter",
        PlayerCombatKill => "player_combat_kill",
        PlayerInfoRemove => "player_info_remove",
        PlayerInfoUpdate => "player_info_update",
        PlayerLookAt => "player_look_at",
        PlayerPosition => "player_position",
        Recipe => "recipe",
        RemoveEntities => "remove_entities",
        RemoveMobEffect => "remove_mob_effect",
        ResetScore => "reset_score",
        ResourcePackPop => "resource_pack_pop",
        ResourcePackPush => "resource_pack_push",
        Respawn => "respawn",
        RotateHead => "rotate_head",
        SectionBlocksUpdate => "section_blocks_update",
        SelectAdvancementsTab => "select_advancements_tab",
        ServerData => "server_data",
        SetActionBarText => "set_action_bar_text",
        SetBorderCenter => "set_border_center",
        SetBorderLerpSize => "set_border_lerp_size",
        SetBorderSize => "set_border_size",
        SetBorderWarningDelay => "set_border_warning_delay",
        SetBorderWarningDistance => "set_border_warning_distance",
        SetCamera => "set_camera",
        SetCarriedItem => "set_carried_item",
        SetChunkCacheCenter => "set_chunk_cache_center",
        SetChunkCacheRadius => "set_chunk_cache_radius",
        SetDefaultSpawnPosition => "set_default_spawn_position",
        SetDisplayObjective => "set_display_objective",
        SetEntityData => "set_entity_data",
        SetEntityLink => "set_entity_link",
        SetEntityMotion => "set_entity_motion",
        SetEquipment => "set_equipment",
        SetExperience => "set_experience",
        SetHealth => "set_health",
        SetObjective => "set_objective",
        SetPassengers => "set_passengers",
        SetPlayerTeam => "set_player_team",
        SetScore => "set_score",
        SetSimulationDistance => "set_simulation_distance",
        SetSubtitleText => "set_subtitle_text",
        SetTime => "set_time",
        SetTitleText => "set_title_text",
        SetTitlesAnimation => "set_titles_animation",
        SoundEntity => "sound_entity",
        Sound => "sound",
        StartConfiguration => "start_configuration",
        StopSound => "stop_sound",
        StoreCookie => "store_cookie",
        SystemChat => "system_chat",
        TabList => "tab_list",
        TagQuery => "tag_query",
        TakeItemEntity => "take_item_entity",
        TeleportEntity => "teleport_entity",
        TickingState => "ticking_state",
        TickingStep => "ticking_step",
        Transfer => "transfer",
        UpdateAdvancements => "update_advancements",
        UpdateAttributes => "update_attributes",
        UpdateMobEffect => "update_mob_effect",
        UpdateRecipes => "update_recipes",
        UpdateTags => "update_tags",
        ProjectilePower => "projectile_power",
    }
}

packet_ids! {
    /// Play state, client to server, protocols 766 and 767.
    pub enum ServerboundPackets1_20_5 {
        AcceptTeleportation => "accept_teleportation",
        BlockEntityTagQuery => "block_entity_tag_query",
        ChangeDifficulty => "change_difficulty",
        ChatAck => "chat_ack",
        ChatCommand => "chat_command",
        ChatCommandSigned => "chat_command_signed",
        Chat => "chat",
        ChatSessionUpdate => "chat_session_update",
        ChunkBatchReceived => "chunk_batch_received",
        ClientCommand => "client_command",
        ClientInformation => "client_information",
        CommandSuggestion => "command_suggestion",
        ConfigurationAcknowledged => "configuration_acknowledged",
        ContainerButtonClick => "container_button_click",
        ContainerClick => "container_click",
        ContainerClose => "container_close",
        ContainerSlotStateChanged => "container_slot_state_changed",
        CookieResponse => "cookie_response",
        CustomPayload => "custom_payload",
        DebugSampleSubscription => "debug_sample_subscription",
        EditBook => "edit_book",
        EntityTagQuery => "entity_tag_query",
        Interact => "interact",
        JigsawGenerate => "jigsaw_generate",
        KeepAlive => "keep_alive",
        LockDifficulty => "lock_difficulty",
        MovePlayerPos => "move_player_pos",
        MovePlayerPosRot => "move_player_pos_rot",
        MovePlayerRot => "move_player_rot",
        MovePlayerStatusOnly => "move_player_status_only",
        MoveVehicle => "move_vehicle",
        PaddleBoat => "paddle_boat",
        PickItem => "pick_item",
        PingRequest => "ping_request",
        PlaceRecipe => "place_recipe",
        PlayerAbilities => "player_abilities",
        PlayerAction => "player_action",
        PlayerCommand => "player_command",
        PlayerInput => "player_input",
        Pong => "pong",
        RecipeBookChangeSettings => "recipe_book_change_settings",
        RecipeBookSeenRecipe => "recipe_book_seen_recipe",
        RenameItem => "rename_item",
        ResourcePack => "resource_pack",
        SeenAdvancements => "seen_advancements",
        SelectTrade => "select_trade",
        SetBeacon => "set_beacon",
        SetCarriedItem => "set_carried_item",
        SetCommandBlock => "set_command_block",
        SetCommandMinecart => "set_command_minecart",
        SetCreativeModeSlot => "set_creative_mode_slot",
        SetJigsawBlock => "set_jigsaw_block",
        SetStructureBlock => "set_structure_block",
        SignUpdate => "sign_update",
        Swing => "swing",
        TeleportToEntity => "teleport_to_entity",
        UseItemOn => "use_item_on",
        UseItem => "use_item",
    }
}

/// 1.21 did not change the serverbound play table.
pub type ServerboundPackets1_21 = ServerboundPackets1_20_5;

packet_ids! {
    /// Play state, client to server, protocol 768.
    pub enum ServerboundPackets1_21_2 {
        AcceptTeleportation => "accept_teleportation",
        BlockEntityTagQuery => "block_entity_tag_query",
        BundleItemSelected => "bundle_item_selected",
        ChangeDifficulty => "change_difficulty",
        ChatAck => "chat_ack",
        ChatCommand => "chat_command",
        ChatCommandSigned => "chat_command_signed",
        Chat => "chat",
        ChatSessionUpdate => "chat_session_update",
        ChunkBatchReceived => "chunk_batch_received",
        ClientCommand => "client_command",
        ClientTickEnd => "client_tick_end",
        ClientInformation => "client_information",
        CommandSuggestion => "command_suggestion",
        ConfigurationAcknowledged => "configuration_acknowledged",
        ContainerButtonClick => "container_button_click",
        ContainerClick => "container_click",
        ContainerClose => "container_close",
        ContainerSlotStateChanged => "container_slot_state_changed",
        CookieResponse => "cookie_response",
        CustomPayload => "custom_payload",
        DebugSampleSubscription => "debug_sample_subscription",
        EditBook => "edit_book",
        EntityTagQuery => "entity_tag_query",
        Interact => "interact",
        JigsawGenerate => "jigsaw_generate",
        KeepAlive => "keep_alive",
        LockDifficulty => "lock_difficulty",
        MovePlayerPos => "move_player_pos",
        MovePlayerPosRot => "move_player_pos_rot",
        MovePlayerRot => "move_player_rot",
        MovePlayerStatusOnly => "move_player_status_only",
        MoveVehicle => "move_vehicle",
        PaddleBoat => "paddle_boat",
        PickItem => "pick_item",
        PingRequest => "ping_request",
        PlaceRecipe => "place_recipe",
        PlayerAbilities => "player_abilities",
        PlayerAction => "player_action",
        PlayerCommand => "player_command",
        PlayerInput => "player_input",
        Pong => "pong",
        RecipeBookChangeSettings => "recipe_book_change_settings",
        RecipeBookSeenRecipe => "recipe_book_seen_recipe",
        RenameItem => "rename_item",
        ResourcePack => "resource_pack",
        SeenAdvancements => "seen_advancements",
        SelectTrade => "select_trade",
        SetBeacon => "set_beacon",
        SetCarriedItem => "set_carried_item",
        SetCommandBlock => "set_command_block",
        SetCommandMinecart => "set_command_minecart",
        SetCreativeModeSlot => "set_creative_mode_slot",
        SetJigsawBlock => "set_jigsaw_block",
        SetStructureBlock => "set_structure_block",
        SignUpdate => "sign_update",
        Swing => "swing",
        TeleportToEntity => "teleport_to_entity",
        UseItemOn => "use_item_on",
        UseItem => "use_item",
    }
}

packet_ids! {
    /// Configuration state, server to client, protocols 767 and 768.
    pub enum ClientboundConfigurationPackets1_21 {
        CookieRequest => "cookie_request",
        CustomPayload => "custom_payload",
        Disconnect => "disconnect",
        FinishConfiguration => "finish_configuration",
        KeepAlive => "keep_alive",
        Ping => "ping",
        ResetChat => "reset_chat",
        RegistryData => "registry_data",
        ResourcePackPop => "resource_pack_pop",
        ResourcePackPush => "resource_pack_push",
        StoreCookie => "store_cookie",
        Transfer => "transfer",
        UpdateEnabledFeatures => "update_enabled_features",
        UpdateTags => "update_tags",
        SelectKnownPacks => "select_known_packs",
        CustomReportDetails => "custom_report_details",
        ServerLinks => "server_links",
    }
}

packet_ids! {
    /// Configuration state, server to client, protocol 766.
    pub enum ClientboundConfigurationPackets1_20_5 {
        CookieRequest => "cookie_request",
        CustomPayload => "custom_payload",
        Disconnect => "disconnect",
        FinishConfiguration => "finish_configuration",
        KeepAlive => "keep_alive",
        Ping => "ping",
        ResetChat => "reset_chat",
        RegistryData => "registry_data",
        ResourcePackPop => "resource_pack_pop",
        ResourcePackPush => "resource_pack_push",
        StoreCookie => "store_cookie",
        Transfer => "transfer",
        UpdateEnabledFeatures => "update_enabled_features",
        UpdateTags => "update_tags",
        SelectKnownPacks => "select_known_packs",
    }
}

packet_ids! {
    /// Configuration state, client to server, unchanged since 766.
    pub enum ServerboundConfigurationPackets1_20_5 {
        ClientInformation => "client_information",
        CookieResponse => "cookie_response",
        CustomPayload => "custom_payload",
        FinishConfiguration => "finish_configuration",
        KeepAlive => "keep_alive",
        Pong => "pong",
        ResourcePack => "resource_pack",
        SelectKnownPacks => "select_known_packs",
    }
}
