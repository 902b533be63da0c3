use crate::parameter as param;

// A flat group of booleans, one per control in the matching parameter enum.
macro_rules! switch_section {
    (
        $(#[$meta:meta])*
        $name:ident for $param:ident {
            $($field:ident => $variant:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            $(pub $field: bool,)+
        }

        impl $name {
            pub fn state(&self, p: param::$param) -> bool {
                match p {
                    $(param::$param::$variant => self.$field,)+
                }
            }

            pub fn set_state(&mut self, p: param::$param, state: bool) {
                match p {
                    $(param::$param::$variant => self.$field = state,)+
                }
            }
        }
    };
}

switch_section! {
    /// Main transport and punch buttons
    Transport for Transport {
        talkback => Talkback,
        rewind => Rewind,
        fast_fwd => FastFwd,
        stop => Stop,
        play => Play,
        record => Record,
        rtz => Rtz,
        end => End,
        online => Online,
        loop_ => Loop,
        quick_punch => QuickPunch,
        punch_audition => PunchAudition,
        punch_pre => PunchPre,
        punch_in => PunchIn,
        punch_out => PunchOut,
        punch_post => PunchPost,
    }
}

switch_section! {
    ControlRoom for ControlRoom {
        input1 => Input1,
        input2 => Input2,
        input3 => Input3,
        discrete_input_1_to_1 => DiscreteInput1to1,
        mute => Mute,
        output1 => Output1,
        output2 => Output2,
        output3 => Output3,
        dim => Dim,
        mono => Mono,
    }
}

switch_section! {
    /// Keyboard shortcut keys
    HotKeys for HotKey {
        shift => Shift,
        ctrl => Ctrl,
        option => Option,
        cmd => Cmd,
        undo => Undo,
        save => Save,
        edit_mode => EditMode,
        edit_tool => EditTool,
    }
}
